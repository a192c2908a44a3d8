//! Content checks for validated type records.
//!
//! Each check takes a `&TypeRecord` and returns a `ValidationResult`.
//! Nothing here rejects a record. Most findings are warnings for content
//! authors; a type that misidentifies with itself is an error.

use crate::types::{SectionName, TypeDigit, TypeRecord, TypeSections};

use super::warning::{Diagnostic, ValidationResult};

/// Warn about canonical sections that came out empty.
pub fn check_empty_sections(record: &TypeRecord) -> ValidationResult {
    let mut result = ValidationResult::new();

    for name in SectionName::ALL {
        if section_is_empty(&record.sections, name) {
            result.push(
                Diagnostic::warning(
                    "ennea::validate::empty-section",
                    format!("section [{}] is missing or empty", name.title()),
                )
                .in_section(name.title())
                .with_help(format!("Add a [{}] block to the document", name.title())),
            );
        }
    }

    result
}

fn section_is_empty(sections: &TypeSections, name: SectionName) -> bool {
    match name {
        SectionName::TypeSummary => sections.summary.is_empty(),
        SectionName::LongDescription => sections.long_description.is_empty(),
        SectionName::MightBe => sections.might_be.is_empty(),
        SectionName::ProbablyNot => sections.probably_not.is_empty(),
        SectionName::HealthyLevel => sections.healthy_level.is_empty(),
        SectionName::AverageLevel => sections.average_level.is_empty(),
        SectionName::UnhealthyLevel => sections.unhealthy_level.is_empty(),
        SectionName::Misconceptions => sections.misconceptions.is_empty(),
        SectionName::MisidentifiedAsThis => sections.misidentified_as_this.is_empty(),
        SectionName::MayMisidentifyAs => sections.may_misidentify_as.is_empty(),
        SectionName::WingTypes => sections.wing_types.is_empty(),
        SectionName::LineTypes => sections.line_types.is_empty(),
        SectionName::GrowthPractices => sections.growth_practices.is_empty(),
        SectionName::FamousExamples => sections.famous_examples.is_empty(),
    }
}

/// Warn when a wing record names a type that is not adjacent on the circle.
pub fn check_wing_neighbours(record: &TypeRecord) -> ValidationResult {
    let mut result = ValidationResult::new();
    let neighbours = neighbours_of(record.digit);

    for key in record.sections.wing_types.keys() {
        match key_digit(key) {
            Some(digit) if neighbours.contains(&digit) => {}
            _ => result.push(
                Diagnostic::warning(
                    "ennea::validate::wing-not-adjacent",
                    format!(
                        "wing '{}' is not adjacent to type {}",
                        key, record.digit
                    ),
                )
                .in_section(SectionName::WingTypes.title())
                .with_help(format!(
                    "Type {} wings are types {} and {}",
                    record.digit, neighbours[0], neighbours[1]
                )),
            ),
        }
    }

    result
}

/// Flag a type listed as misidentifying with itself.
pub fn check_self_misidentification(record: &TypeRecord) -> ValidationResult {
    let mut result = ValidationResult::new();
    let lists = [
        (SectionName::MisidentifiedAsThis, &record.sections.misidentified_as_this),
        (SectionName::MayMisidentifyAs, &record.sections.may_misidentify_as),
    ];

    for (section, entries) in lists {
        for entry in entries {
            if key_digit(&entry.type_label) == Some(record.digit) {
                result.push(
                    Diagnostic::error(
                        "ennea::validate::self-misidentification",
                        format!("'{}' refers to this type itself", entry.type_label),
                    )
                    .in_section(section.title())
                    .with_help("List the other types this one is confused with"),
                );
            }
        }
    }

    result
}

/// The two types either side of `digit` on the symbol (9 wraps to 1).
fn neighbours_of(digit: TypeDigit) -> [TypeDigit; 2] {
    let n = digit.get();
    let below = if n == 1 { 9 } else { n - 1 };
    let above = if n == 9 { 1 } else { n + 1 };
    [below, above].map(|d| TypeDigit::new(d).unwrap_or(digit))
}

/// Digit from a `Type N...` label.
fn key_digit(label: &str) -> Option<TypeDigit> {
    let rest = label.trim().strip_prefix("Type ")?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
