//! Typed decoding of validated frontmatter.

use serde::Deserialize;
use serde_yaml::Value;

use crate::parser::Frontmatter;
use crate::types::ContentBlock;

/// The frontmatter fields a record carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterFields {
    pub name: String,
    pub brief_description: String,
    pub top_priority: ContentBlock,
    pub secondary_desires: Vec<ContentBlock>,
    pub top_fear: ContentBlock,
    pub secondary_fears: Vec<ContentBlock>,
}

/// A block written either as a mapping or as one `Summary: explanation` string.
#[derive(Deserialize)]
#[serde(untagged)]
enum BlockSource {
    Fields { summary: String, explanation: String },
    Line(String),
}

impl BlockSource {
    fn into_block(self) -> Result<ContentBlock, String> {
        match self {
            BlockSource::Fields {
                summary,
                explanation,
            } => Ok(ContentBlock::new(summary.trim(), explanation.trim())),
            BlockSource::Line(line) => ContentBlock::from_line(&line)
                .ok_or_else(|| format!("'{}' has no `Summary: explanation` split", line)),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFields {
    type_name: String,
    brief_description: String,
    top_priority: BlockSource,
    secondary_desires: Vec<BlockSource>,
    top_fear: BlockSource,
    secondary_fears: Vec<BlockSource>,
}

fn into_blocks(sources: Vec<BlockSource>) -> Result<Vec<ContentBlock>, String> {
    sources.into_iter().map(BlockSource::into_block).collect()
}

impl FrontmatterFields {
    /// Decode the record fields from frontmatter values.
    ///
    /// Unknown keys are ignored. Errors are plain messages; callers wrap
    /// them with the document's digit.
    pub fn decode(frontmatter: &Frontmatter) -> Result<Self, String> {
        let mapping: serde_yaml::Mapping = frontmatter
            .values
            .iter()
            .map(|(key, value)| (Value::String(key.clone()), value.clone()))
            .collect();

        let raw: RawFields =
            serde_yaml::from_value(Value::Mapping(mapping)).map_err(|e| e.to_string())?;

        Ok(Self {
            name: raw.type_name.trim().to_string(),
            brief_description: raw.brief_description.trim().to_string(),
            top_priority: raw.top_priority.into_block()?,
            secondary_desires: into_blocks(raw.secondary_desires)?,
            top_fear: raw.top_fear.into_block()?,
            secondary_fears: into_blocks(raw.secondary_fears)?,
        })
    }
}
