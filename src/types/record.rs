//! The aggregate record handed to display code.

use serde::{Deserialize, Serialize};

use super::content::{ContentBlock, LevelTrait};
use super::digit::TypeDigit;
use super::records::{LineTypes, Misidentification, WingTypes};

/// A fully validated personality type.
///
/// Only ever constructed by the assembler after every section parsed and
/// the schema passed; there is no partially valid `TypeRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRecord {
    pub digit: TypeDigit,
    pub name: String,
    pub brief_description: String,
    pub top_priority: ContentBlock,
    pub secondary_desires: Vec<ContentBlock>,
    pub top_fear: ContentBlock,
    pub secondary_fears: Vec<ContentBlock>,
    pub sections: TypeSections,
}

/// Parsed body sections. Absent sections hold their kind's empty value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSections {
    pub summary: String,
    pub long_description: String,
    pub might_be: Vec<String>,
    pub probably_not: Vec<String>,
    pub healthy_level: Vec<LevelTrait>,
    pub average_level: Vec<LevelTrait>,
    pub unhealthy_level: Vec<LevelTrait>,
    pub misconceptions: Vec<String>,
    /// Types that might be mistaken for this one.
    pub misidentified_as_this: Vec<Misidentification>,
    /// Types this one might be mistaken for.
    pub may_misidentify_as: Vec<Misidentification>,
    pub wing_types: WingTypes,
    pub line_types: LineTypes,
    pub growth_practices: Vec<String>,
    pub famous_examples: Vec<String>,
}
