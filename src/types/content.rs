//! Small text records shared by frontmatter and sections.

use serde::{Deserialize, Serialize};

/// A headline with its longer explanation.
///
/// Used for the frontmatter priorities and fears, both standalone
/// (`topPriority`) and in lists (`secondaryDesires`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentBlock {
    pub summary: String,
    pub explanation: String,
}

impl ContentBlock {
    pub fn new(summary: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            explanation: explanation.into(),
        }
    }

    /// Split a `Summary: explanation` line at its first colon.
    ///
    /// A leading `- ` bullet is stripped. Returns `None` when there is no
    /// colon or either half is empty.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let line = line.strip_prefix("- ").unwrap_or(line);
        let (summary, explanation) = line.split_once(':')?;
        let (summary, explanation) = (summary.trim(), explanation.trim());

        if summary.is_empty() || explanation.is_empty() {
            return None;
        }

        Some(Self::new(summary, explanation))
    }
}

/// One trait bullet from a level-of-development section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelTrait {
    #[serde(rename = "trait")]
    pub name: String,
    pub explanation: String,
}

impl LevelTrait {
    pub fn new(name: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explanation: explanation.into(),
        }
    }
}

/// Append a continuation line to accumulated text, space-joined.
pub(crate) fn append_continuation(target: &mut String, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}
