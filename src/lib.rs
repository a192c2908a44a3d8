//! ennea - Enneagram type content parser and validator
//!
//! Turns the nine type documents (markdown with YAML frontmatter and
//! `[Section]` blocks) into validated, strongly typed records.

pub mod assembly;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod registry;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_with, DiscoveryResult, Manifest, Overrides, ScanResult};
pub use error::{ContentError, Result};
pub use parser::{parse_type_document, ParsedType};
pub use registry::{
    BatchReport, Cache, ContentSource, DirectorySource, Loaded, MemoryCache, MemorySource,
    TypeRegistry,
};
pub use types::{
    ContentBlock, Differences, LevelTrait, LineDynamics, LineType, LineTypes, Misidentification,
    SectionKind, SectionName, SectionValue, TypeDigit, TypeRecord, TypeSections, WingCombination,
    WingType, WingTypes,
};
pub use validation::{check_record, Diagnostic, Severity, ValidationResult};
