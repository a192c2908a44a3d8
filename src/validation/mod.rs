//! Validation for type documents.
//!
//! Three layers, in pipeline order:
//! - a required-field fast path run right after frontmatter extraction
//! - the schema check run once all sections are parsed
//! - content checks over an assembled record, which never reject it

mod checks;
pub mod schema;
mod warning;

pub use schema::{SchemaDiagnostic, Shape, FRONTMATTER_SCHEMA};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::error::{ContentError, Result};
use crate::output::Printer;
use crate::parser::Frontmatter;
use crate::types::{SectionName, SectionValue, TypeDigit, TypeRecord};

/// Fail fast on the first required frontmatter field that is absent or empty.
pub fn check_required_fields(digit: TypeDigit, frontmatter: &Frontmatter) -> Result<()> {
    let missing = FRONTMATTER_SCHEMA
        .iter()
        .find(|field| frontmatter.get(field.name).map_or(true, schema::is_blank));

    match missing {
        Some(field) => Err(ContentError::MissingRequiredField {
            digit,
            field: field.name,
        }),
        None => Ok(()),
    }
}

/// Validate frontmatter shapes against the schema.
pub fn validate_frontmatter(digit: TypeDigit, frontmatter: &Frontmatter) -> Result<()> {
    schema::check_frontmatter(digit, frontmatter).map_err(|d| schema_error(digit, d))
}

/// Validate that a parsed section has its kind's shape.
pub fn validate_section(digit: TypeDigit, name: SectionName, value: &SectionValue) -> Result<()> {
    schema::check_section(name, value).map_err(|d| schema_error(digit, d))
}

pub(crate) fn schema_error(digit: TypeDigit, diagnostic: impl std::fmt::Display) -> ContentError {
    ContentError::SchemaValidation {
        digit,
        diagnostic: diagnostic.to_string(),
    }
}

/// Run all content checks against a record.
pub fn check_record(record: &TypeRecord) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_sections(record));
    result.merge(checks::check_wing_neighbours(record));
    result.merge(checks::check_self_misidentification(record));

    result.attribute_to(record.digit);
    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(d.severity);
        eprintln!("  {}[{}]: {}", label, d.code, d);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_frontmatter;

    fn nine() -> TypeDigit {
        TypeDigit::new(9).unwrap()
    }

    #[test]
    fn test_required_field_missing() {
        let fm = extract_frontmatter("---\ntypeNumber: 9\ntypeName: The Peacemaker\n---\n").unwrap();

        let err = check_required_fields(nine(), &fm).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingRequiredField { field: "briefDescription", .. }
        ));
    }

    #[test]
    fn test_required_field_blank_counts_as_missing() {
        let fm = extract_frontmatter("---\ntypeNumber: \"\"\n---\n").unwrap();

        let err = check_required_fields(nine(), &fm).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingRequiredField { field: "typeNumber", .. }
        ));
    }

    #[test]
    fn test_validate_section_maps_to_schema_error() {
        let err = validate_section(nine(), SectionName::TypeSummary, &SectionValue::List(vec![]))
            .unwrap_err();

        insta::assert_snapshot!(
            err.to_string(),
            @"Type 9: schema validation failed: sections[Type Summary]: expected text, found list"
        );
    }
}
