//! Parser modules for type documents.
//!
//! A type document is markdown with YAML frontmatter. The body is split
//! into `[Section Name]` blocks, and each block is parsed according to the
//! kind of content its name calls for.
//!
//! # Document Structure
//!
//! - YAML frontmatter between `---` markers (metadata and content blocks)
//! - Zero or more `[Section Name]` headers, each followed by its lines
//!
//! # Usage
//!
//! ```ignore
//! use ennea::parser::parse_type_document;
//!
//! let source = std::fs::read_to_string("content/types/type-9.md")?;
//! let parsed = parse_type_document("9".parse()?, &source)?;
//!
//! println!("{}: {}", parsed.record.digit, parsed.record.name);
//! ```

mod document;
mod frontmatter;
mod line_type;
mod list;
mod misidentification;
mod rules;
mod sections;
mod text;
mod traits;
mod wing;

pub use document::{parse_section, parse_type_document, ParsedType, SectionOutput};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use line_type::parse_line_types;
pub use list::{parse_list, parse_misconceptions, UnmarkedLine};
pub use misidentification::parse_misidentifications;
pub use rules::{DroppedLine, Lenient};
pub use sections::{segment_sections, Section, SectionMap};
pub use text::parse_text;
pub use traits::parse_level_traits;
pub use wing::parse_wing_types;
