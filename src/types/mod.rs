//! Core domain types for ennea.
//!
//! - `TypeDigit` - the `1`..`9` type identifier
//! - `ContentBlock`, `LevelTrait` - small text records
//! - `WingType`, `LineType`, `Misidentification` - multi-field section records
//! - `SectionName`, `SectionKind`, `SectionValue` - section vocabulary
//! - `TypeRecord` - the validated aggregate

mod content;
mod digit;
mod record;
mod records;
mod section;

pub(crate) use content::append_continuation;
pub use content::{ContentBlock, LevelTrait};
pub use digit::TypeDigit;
pub use record::{TypeRecord, TypeSections};
pub use records::{
    Differences, LineDynamics, LineType, LineTypes, Misidentification, WingCombination, WingType,
    WingTypes,
};
pub use section::{SectionKind, SectionName, SectionValue};
