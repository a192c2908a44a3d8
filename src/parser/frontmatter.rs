//! YAML frontmatter extraction.

use std::collections::HashMap;

use thiserror::Error;

/// A document split into its frontmatter values and markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter {
    /// Parsed frontmatter key-value pairs
    pub values: HashMap<String, serde_yaml::Value>,
    /// Byte offset where the body begins
    pub body_start: usize,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.values.get(key)
    }

    /// The markdown body of the source this frontmatter was extracted from.
    pub fn body<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.body_start..).unwrap_or("")
    }
}

/// Why a document could not be split.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FrontmatterError {
    pub message: String,
    #[source]
    pub cause: Option<serde_yaml::Error>,
}

impl FrontmatterError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }
}

/// Extract YAML frontmatter from the beginning of a document.
///
/// Expects the document to start with `---`, contain YAML, and end with `---`.
/// Returns the parsed values and the position where the body begins.
pub fn extract_frontmatter(source: &str) -> Result<Frontmatter, FrontmatterError> {
    // A leading byte-order mark is not content.
    let trimmed = source.trim_start_matches('\u{feff}').trim_start();
    let leading_whitespace = source.len() - trimmed.len();

    let first_line = trimmed.lines().next().unwrap_or("");
    if first_line.trim_end() != "---" {
        return Err(FrontmatterError::new(
            "document must start with a --- frontmatter delimiter",
        ));
    }

    let yaml_start = match trimmed.find('\n') {
        Some(newline) => newline + 1,
        None => return Err(FrontmatterError::new("unclosed frontmatter: missing closing ---")),
    };

    let yaml_section = &trimmed[yaml_start..];
    let closing_offset = find_closing_delimiter(yaml_section)
        .ok_or_else(|| FrontmatterError::new("unclosed frontmatter: missing closing ---"))?;
    let yaml_content = &yaml_section[..closing_offset];

    let parsed: serde_yaml::Value =
        serde_yaml::from_str(yaml_content).map_err(|e| FrontmatterError {
            message: format!("invalid YAML in frontmatter: {}", e),
            cause: Some(e),
        })?;

    let values = match parsed {
        serde_yaml::Value::Mapping(map) => map
            .into_iter()
            .filter_map(|(key, value)| key.as_str().map(|k| (k.to_string(), value)))
            .collect(),
        serde_yaml::Value::Null => HashMap::new(),
        _ => return Err(FrontmatterError::new("frontmatter must be a YAML mapping")),
    };

    // Body starts on the line after the closing ---
    let after_closing = &yaml_section[closing_offset..];
    let closing_line_len = after_closing
        .find('\n')
        .map(|i| i + 1)
        .unwrap_or(after_closing.len());
    let body_start = leading_whitespace + yaml_start + closing_offset + closing_line_len;

    Ok(Frontmatter { values, body_start })
}

/// Find the closing --- delimiter in a string.
///
/// The delimiter must be alone on its line.
fn find_closing_delimiter(s: &str) -> Option<usize> {
    let mut offset = 0;
    for line in s.split_inclusive('\n') {
        if line.trim() == "---" {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_frontmatter() {
        let source = "---\ntypeNumber: \"9\"\ntypeName: The Peacemaker\n---\n[Type Summary]\nCalm.";

        let result = extract_frontmatter(source).unwrap();

        assert_eq!(
            result.get("typeName").and_then(|v| v.as_str()),
            Some("The Peacemaker")
        );
        assert_eq!(result.body(source), "[Type Summary]\nCalm.");
    }

    #[test]
    fn test_byte_order_mark_before_delimiter() {
        let source = "\u{feff}---\ntypeNumber: 9\n---\nbody";

        let result = extract_frontmatter(source).unwrap();

        assert!(result.get("typeNumber").is_some());
        assert_eq!(result.body(source), "body");
    }

    #[test]
    fn test_extract_frontmatter_no_opening() {
        let source = "typeName: test\n---\nbody";

        let err = extract_frontmatter(source).unwrap_err();
        assert!(err.message.contains("must start with"));
    }

    #[test]
    fn test_extract_frontmatter_unclosed() {
        let source = "---\ntypeName: test\nbody content";

        assert!(extract_frontmatter(source).is_err());
    }

    #[test]
    fn test_extract_empty_frontmatter() {
        let source = "---\n---\nbody";

        let result = extract_frontmatter(source).unwrap();
        assert!(result.values.is_empty());
        assert_eq!(result.body(source), "body");
    }

    #[test]
    fn test_extract_frontmatter_invalid_yaml() {
        let source = "---\ntopPriority: [unclosed\n---\n";

        let err = extract_frontmatter(source).unwrap_err();
        assert!(err.cause.is_some());
    }

    #[test]
    fn test_extract_frontmatter_rejects_scalar() {
        let source = "---\njust a string\n---\n";

        let err = extract_frontmatter(source).unwrap_err();
        assert!(err.message.contains("mapping"));
    }

    #[test]
    fn test_leading_whitespace_and_no_body() {
        let source = "\n\n---\ntypeName: x\n---";

        let result = extract_frontmatter(source).unwrap();
        assert_eq!(result.body(source), "");
    }

    #[test]
    fn test_nested_blocks() {
        let source = "---\ntopPriority:\n  summary: Peace\n  explanation: Inner stability\n---\n";

        let result = extract_frontmatter(source).unwrap();
        let block = result.get("topPriority").unwrap();
        assert_eq!(block["summary"].as_str(), Some("Peace"));
    }
}
