//! Shape rules for frontmatter fields and parsed sections.

use std::fmt;

use serde_yaml::Value;

use crate::parser::Frontmatter;
use crate::types::{ContentBlock, SectionKind, SectionName, SectionValue, TypeDigit};

/// Expected shape of one frontmatter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A `1`..`9` digit, as a string or integer.
    Digit,
    /// A non-empty string.
    Text,
    /// A content block: `{summary, explanation}` or `"Summary: explanation"`.
    Block,
    /// A sequence of content blocks.
    BlockList,
}

impl Shape {
    fn expected(self) -> &'static str {
        match self {
            Shape::Digit => "a type digit",
            Shape::Text => "a non-empty string",
            Shape::Block => "a {summary, explanation} block",
            Shape::BlockList => "a list of {summary, explanation} blocks",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub shape: Shape,
}

/// Required frontmatter fields in check order.
pub const FRONTMATTER_SCHEMA: &[FieldSchema] = &[
    FieldSchema { name: "typeNumber", shape: Shape::Digit },
    FieldSchema { name: "typeName", shape: Shape::Text },
    FieldSchema { name: "briefDescription", shape: Shape::Text },
    FieldSchema { name: "topPriority", shape: Shape::Block },
    FieldSchema { name: "secondaryDesires", shape: Shape::BlockList },
    FieldSchema { name: "topFear", shape: Shape::Block },
    FieldSchema { name: "secondaryFears", shape: Shape::BlockList },
];

/// The first shape violation found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDiagnostic {
    /// Dotted path to the offending value, e.g. `secondaryDesires[1].summary`.
    pub path: String,
    pub expected: String,
    pub found: String,
}

impl SchemaDiagnostic {
    fn new(path: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl fmt::Display for SchemaDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}, found {}", self.path, self.expected, self.found)
    }
}

/// Whether a value counts as absent for the required-field check.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}

/// Check every schema field against its shape, stopping at the first violation.
pub fn check_frontmatter(digit: TypeDigit, frontmatter: &Frontmatter) -> Result<(), SchemaDiagnostic> {
    for field in FRONTMATTER_SCHEMA {
        let value = frontmatter.get(field.name).unwrap_or(&Value::Null);
        check_field(digit, field.name, field.shape, value)?;
    }
    Ok(())
}

fn check_field(digit: TypeDigit, path: &str, shape: Shape, value: &Value) -> Result<(), SchemaDiagnostic> {
    match shape {
        Shape::Digit => {
            let found = digit_of(value)
                .ok_or_else(|| SchemaDiagnostic::new(path, shape.expected(), describe(value)))?;
            if found != digit {
                return Err(SchemaDiagnostic::new(
                    path,
                    format!("type {}", digit),
                    format!("type {}", found),
                ));
            }
            Ok(())
        }
        Shape::Text => check_text(path, value),
        Shape::Block => check_block(path, value),
        Shape::BlockList => match value {
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .try_for_each(|(i, item)| check_block(&format!("{}[{}]", path, i), item)),
            other => Err(SchemaDiagnostic::new(path, shape.expected(), describe(other))),
        },
    }
}

fn check_text(path: &str, value: &Value) -> Result<(), SchemaDiagnostic> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(()),
        other => Err(SchemaDiagnostic::new(path, Shape::Text.expected(), describe(other))),
    }
}

fn check_block(path: &str, value: &Value) -> Result<(), SchemaDiagnostic> {
    match value {
        Value::Mapping(map) => {
            for key in ["summary", "explanation"] {
                let field = map.get(key).unwrap_or(&Value::Null);
                check_text(&format!("{}.{}", path, key), field)?;
            }
            Ok(())
        }
        Value::String(line) if ContentBlock::from_line(line).is_some() => Ok(()),
        Value::String(_) => Err(SchemaDiagnostic::new(
            path,
            Shape::Block.expected(),
            "a string without a `Summary: explanation` split",
        )),
        other => Err(SchemaDiagnostic::new(path, Shape::Block.expected(), describe(other))),
    }
}

pub(crate) fn digit_of(value: &Value) -> Option<TypeDigit> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .and_then(TypeDigit::new),
        _ => None,
    }
}

/// Check that a parsed section has the shape its name calls for.
pub fn check_section(name: SectionName, value: &SectionValue) -> Result<(), SchemaDiagnostic> {
    let matches = matches!(
        (name.kind(), value),
        (SectionKind::Text, SectionValue::Text(_))
            | (SectionKind::List | SectionKind::Misconceptions, SectionValue::List(_))
            | (SectionKind::Traits, SectionValue::Traits(_))
            | (SectionKind::WingTypes, SectionValue::WingTypes(_))
            | (SectionKind::LineTypes, SectionValue::LineTypes(_))
            | (SectionKind::Misidentifications, SectionValue::Misidentifications(_))
    );
    if matches {
        Ok(())
    } else {
        Err(SchemaDiagnostic::new(
            format!("sections[{}]", name.title()),
            SectionValue::empty(name.kind()).shape(),
            value.shape(),
        ))
    }
}

/// Short description of a YAML value for diagnostics.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "nothing".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) if s.trim().is_empty() => "an empty string".to_string(),
        Value::String(_) => "a string".to_string(),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("a value tagged {}", tagged.tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_frontmatter;

    fn digit(n: u8) -> TypeDigit {
        TypeDigit::new(n).unwrap()
    }

    fn frontmatter(yaml: &str) -> Frontmatter {
        extract_frontmatter(&format!("---\n{}\n---\n", yaml)).unwrap()
    }

    const VALID: &str = r#"typeNumber: 9
typeName: The Peacemaker
briefDescription: Easygoing and receptive
topPriority:
  summary: Peace
  explanation: Inner and outer harmony
secondaryDesires:
  - summary: Stability
    explanation: Nothing rocks the boat
  - "Comfort: Familiar routines"
topFear:
  summary: Conflict
  explanation: Loss of connection
secondaryFears:
  - "Separation: Being cut off"
"#;

    #[test]
    fn test_valid_frontmatter() {
        assert_eq!(check_frontmatter(digit(9), &frontmatter(VALID)), Ok(()));
    }

    #[test]
    fn test_digit_mismatch() {
        let err = check_frontmatter(digit(4), &frontmatter(VALID)).unwrap_err();
        assert_eq!(err.to_string(), "typeNumber: expected type 4, found type 9");
    }

    #[test]
    fn test_digit_as_string() {
        let yaml = VALID.replace("typeNumber: 9", "typeNumber: \"9\"");
        assert!(check_frontmatter(digit(9), &frontmatter(&yaml)).is_ok());
    }

    #[test]
    fn test_nested_block_path() {
        let yaml = VALID.replace("    explanation: Nothing rocks the boat", "    explanation: 42");
        let err = check_frontmatter(digit(9), &frontmatter(&yaml)).unwrap_err();
        assert_eq!(err.path, "secondaryDesires[0].explanation");
        assert_eq!(err.found, "number 42");
    }

    #[test]
    fn test_block_string_without_colon() {
        let yaml = VALID.replace("\"Separation: Being cut off\"", "\"Separation\"");
        let err = check_frontmatter(digit(9), &frontmatter(&yaml)).unwrap_err();
        assert_eq!(err.path, "secondaryFears[0]");
    }

    #[test]
    fn test_list_field_given_a_block() {
        let yaml = VALID.replace(
            "secondaryFears:\n  - \"Separation: Being cut off\"",
            "secondaryFears:\n  summary: a\n  explanation: b",
        );
        let err = check_frontmatter(digit(9), &frontmatter(&yaml)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "secondaryFears: expected a list of {summary, explanation} blocks, found a mapping"
        );
    }

    #[test]
    fn test_blank_values() {
        assert!(is_blank(&Value::Null));
        assert!(is_blank(&Value::String("  ".to_string())));
        assert!(is_blank(&Value::Sequence(vec![])));
        assert!(!is_blank(&Value::Bool(false)));
    }

    #[test]
    fn test_section_shape() {
        assert!(check_section(SectionName::Misconceptions, &SectionValue::List(vec![])).is_ok());

        let err = check_section(SectionName::WingTypes, &SectionValue::List(vec![])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sections[Wing Types]: expected wing record map, found list"
        );
    }
}
