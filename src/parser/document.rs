//! The full pipeline for one type document.

use crate::assembly::{assemble, ParsedSections};
use crate::error::{ContentError, Result};
use crate::types::{SectionKind, SectionName, SectionValue, TypeDigit, TypeRecord};
use crate::validation::{check_required_fields, Diagnostic, ValidationResult};

use super::frontmatter::extract_frontmatter;
use super::line_type::parse_line_types;
use super::list::{parse_list, parse_misconceptions};
use super::misidentification::parse_misidentifications;
use super::rules::Lenient;
use super::sections::segment_sections;
use super::text::parse_text;
use super::traits::parse_level_traits;
use super::wing::parse_wing_types;

/// A validated record and the non-fatal findings made while parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedType {
    pub record: TypeRecord,
    pub warnings: ValidationResult,
}

/// One section's parsed value with any warnings it raised.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutput {
    pub value: SectionValue,
    pub warnings: Vec<Diagnostic>,
}

/// Parse one section's lines with the parser its name calls for.
///
/// Strict lists fail with `MalformedSection`; record-shaped sections never
/// fail and report skipped lines as warnings instead.
pub fn parse_section(digit: TypeDigit, name: SectionName, lines: &[String]) -> Result<SectionOutput> {
    let strict = |items: std::result::Result<Vec<String>, super::list::UnmarkedLine>| {
        items
            .map(SectionValue::List)
            .map_err(|e| ContentError::malformed_section(digit, name, &e.line, e.to_string()))
    };

    let lenient = match name.kind() {
        SectionKind::Text => Lenient {
            value: SectionValue::Text(parse_text(lines)),
            dropped: Vec::new(),
        },
        SectionKind::List => Lenient {
            value: strict(parse_list(lines))?,
            dropped: Vec::new(),
        },
        SectionKind::Misconceptions => Lenient {
            value: strict(parse_misconceptions(lines))?,
            dropped: Vec::new(),
        },
        SectionKind::Traits => parse_level_traits(lines).map(SectionValue::Traits),
        SectionKind::WingTypes => parse_wing_types(lines).map(SectionValue::WingTypes),
        SectionKind::LineTypes => parse_line_types(lines).map(SectionValue::LineTypes),
        SectionKind::Misidentifications => {
            parse_misidentifications(lines).map(SectionValue::Misidentifications)
        }
    };

    let warnings = lenient
        .dropped
        .into_iter()
        .map(|dropped| {
            tracing::warn!(%digit, section = name.title(), line = %dropped.line, "dropped line");
            Diagnostic::warning(
                "ennea::parse::dropped-line",
                format!("dropped \"{}\": {}", dropped.line, dropped.reason),
            )
            .in_section(name.title())
            .for_digit(digit)
        })
        .collect();

    Ok(SectionOutput {
        value: lenient.value,
        warnings,
    })
}

/// Parse a type document into a validated record.
///
/// Stages run in order: frontmatter extraction, the required-field check,
/// section segmentation, per-section parsing, then assembly with schema
/// validation. The first fatal error stops the pipeline.
pub fn parse_type_document(digit: TypeDigit, source: &str) -> Result<ParsedType> {
    let frontmatter = extract_frontmatter(source).map_err(|e| ContentError::MalformedDocument {
        digit,
        message: e.message,
        cause: e.cause,
    })?;
    tracing::debug!(%digit, fields = frontmatter.values.len(), "extracted frontmatter");

    check_required_fields(digit, &frontmatter)?;

    let sections = segment_sections(frontmatter.body(source));
    tracing::debug!(%digit, sections = sections.len(), "segmented body");

    let mut warnings = ValidationResult::new();
    for unknown in sections.unknown() {
        warnings.push(
            Diagnostic::warning(
                "ennea::parse::unknown-section",
                format!("section [{}] is not recognized and was ignored", unknown.title),
            )
            .in_section(unknown.title.clone())
            .for_digit(digit),
        );
    }

    let mut parsed = ParsedSections::new();
    for name in SectionName::ALL {
        let output = parse_section(digit, name, sections.lines(name))?;
        warnings.extend(output.warnings);
        parsed.insert(name, output.value);
    }

    let record = assemble(digit, &frontmatter, parsed)?;
    Ok(ParsedType { record, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nine() -> TypeDigit {
        TypeDigit::new(9).unwrap()
    }

    fn lines(source: &str) -> Vec<String> {
        source.lines().map(str::to_string).collect()
    }

    const FRONTMATTER: &str = "---\n\
        typeNumber: 9\n\
        typeName: The Peacemaker\n\
        briefDescription: Receptive, reassuring, agreeable\n\
        topPriority: {summary: Peace, explanation: Inner stability}\n\
        secondaryDesires: [\"Harmony: Smooth relationships\"]\n\
        topFear: {summary: Conflict, explanation: Loss and separation}\n\
        secondaryFears: [\"Disruption: Being pushed\"]\n\
        ---\n";

    #[test]
    fn test_minimal_document() {
        let source = format!("{}[Growth Practices]\n- Meditate daily\n- Journal weekly\n", FRONTMATTER);

        let parsed = parse_type_document(nine(), &source).unwrap();

        assert_eq!(
            parsed.record.sections.growth_practices,
            vec!["Meditate daily", "Journal weekly"]
        );
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_empty_bullet_is_skipped() {
        let source = format!(
            "{}[Growth Practices]\n- Meditate daily\n- \n- Journal weekly\n",
            FRONTMATTER
        );

        let parsed = parse_type_document(nine(), &source).unwrap();

        assert_eq!(
            parsed.record.sections.growth_practices,
            vec!["Meditate daily", "Journal weekly"]
        );
    }

    #[test]
    fn test_byte_order_mark_is_accepted() {
        let source = format!("\u{feff}{}[Type Summary]\nCalm.\n", FRONTMATTER);

        let parsed = parse_type_document(nine(), &source).unwrap();

        assert_eq!(parsed.record.name, "The Peacemaker");
        assert_eq!(parsed.record.sections.summary, "Calm.");
    }

    #[test]
    fn test_missing_delimiter_is_malformed_document() {
        let err = parse_type_document(nine(), "typeName: x\n[Type Summary]\nx").unwrap_err();
        assert!(matches!(err, ContentError::MalformedDocument { .. }));
    }

    #[test]
    fn test_missing_brief_description_fails_before_sections() {
        let source = FRONTMATTER.replace("briefDescription: Receptive, reassuring, agreeable\n", "")
            + "[Famous Examples]\nnot a list item\n";

        // The broken list would raise MalformedSection if sections were parsed.
        let err = parse_type_document(nine(), &source).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingRequiredField { field: "briefDescription", .. }
        ));
    }

    #[test]
    fn test_strict_list_error_names_section() {
        let source = format!("{}[Famous Examples]\n- Fred Rogers\nAbraham Lincoln\n", FRONTMATTER);

        let err = parse_type_document(nine(), &source).unwrap_err();

        assert_eq!(err.section(), Some("Famous Examples"));
        assert!(matches!(err, ContentError::MalformedSection { ref line, .. } if line == "Abraham Lincoln"));
    }

    #[test]
    fn test_unknown_section_warns() {
        let source = format!("{}[Career Paths]\n- Mediator\n", FRONTMATTER);

        let parsed = parse_type_document(nine(), &source).unwrap();

        assert_eq!(parsed.warnings.warning_count(), 1);
        let warning = parsed.warnings.iter().next().unwrap();
        assert_eq!(warning.code, "ennea::parse::unknown-section");
    }

    #[test]
    fn test_document_without_headers_is_valid_and_empty() {
        let source = format!("{}Just prose, no sections.\n", FRONTMATTER);

        let parsed = parse_type_document(nine(), &source).unwrap();

        assert!(parsed.record.sections.summary.is_empty());
        assert!(parsed.record.sections.wing_types.is_empty());
    }

    #[test]
    fn test_parse_section_dropped_lines_become_warnings() {
        let output = parse_section(
            nine(),
            SectionName::MayMisidentifyAs,
            &lines("• Type 2: The Helper\n- Key Differences\n• Core Motive: typo"),
        )
        .unwrap();

        assert_eq!(output.warnings.len(), 1);
        assert_eq!(
            output.warnings[0].section.as_deref(),
            Some("This Type May Misidentify as...")
        );
        assert!(matches!(output.value, SectionValue::Misidentifications(ref r) if r.len() == 1));
    }

    #[test]
    fn test_parse_section_misconceptions_are_lists() {
        let output = parse_section(
            nine(),
            SectionName::Misconceptions,
            &lines("1. **Nines are lazy**: They conserve\nenergy for what matters"),
        )
        .unwrap();

        assert_eq!(
            output.value,
            SectionValue::List(vec![
                "**Nines are lazy**: They conserve energy for what matters".to_string()
            ])
        );
    }

    #[test]
    fn test_idempotent() {
        let source = format!(
            "{}[Type Summary]\nCalm.\n[Healthy Level of Development]\n- Serene: At peace\n",
            FRONTMATTER
        );

        let first = parse_type_document(nine(), &source).unwrap();
        let second = parse_type_document(nine(), &source).unwrap();

        assert_eq!(first, second);
    }
}
