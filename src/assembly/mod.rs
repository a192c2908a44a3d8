//! Record assembly: merging frontmatter and parsed sections into a `TypeRecord`.

mod frontmatter;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::parser::Frontmatter;
use crate::types::{SectionName, SectionValue, TypeDigit, TypeRecord, TypeSections};
use crate::validation::{schema_error, validate_frontmatter, validate_section};

pub use frontmatter::FrontmatterFields;

/// Parsed values for the canonical sections of one document.
pub type ParsedSections = BTreeMap<SectionName, SectionValue>;

/// Build a validated record from frontmatter and parsed sections.
///
/// Sections missing from `sections` take their kind's empty value. The
/// first schema violation aborts assembly; no partial record is returned.
pub fn assemble(
    digit: TypeDigit,
    frontmatter: &Frontmatter,
    mut sections: ParsedSections,
) -> Result<TypeRecord> {
    validate_frontmatter(digit, frontmatter)?;
    let fields = FrontmatterFields::decode(frontmatter).map_err(|e| schema_error(digit, e))?;

    let mut parsed = TypeSections::default();
    for name in SectionName::ALL {
        let value = sections
            .remove(&name)
            .unwrap_or_else(|| SectionValue::empty(name.kind()));
        validate_section(digit, name, &value)?;
        place(&mut parsed, name, value).map_err(|e| schema_error(digit, e))?;
    }

    tracing::debug!(%digit, name = %fields.name, "assembled type record");

    Ok(TypeRecord {
        digit,
        name: fields.name,
        brief_description: fields.brief_description,
        top_priority: fields.top_priority,
        secondary_desires: fields.secondary_desires,
        top_fear: fields.top_fear,
        secondary_fears: fields.secondary_fears,
        sections: parsed,
    })
}

/// Move a section value into its field.
fn place(sections: &mut TypeSections, name: SectionName, value: SectionValue) -> std::result::Result<(), String> {
    use SectionName as N;
    use SectionValue as V;

    match (name, value) {
        (N::TypeSummary, V::Text(text)) => sections.summary = text,
        (N::LongDescription, V::Text(text)) => sections.long_description = text,
        (N::MightBe, V::List(items)) => sections.might_be = items,
        (N::ProbablyNot, V::List(items)) => sections.probably_not = items,
        (N::HealthyLevel, V::Traits(traits)) => sections.healthy_level = traits,
        (N::AverageLevel, V::Traits(traits)) => sections.average_level = traits,
        (N::UnhealthyLevel, V::Traits(traits)) => sections.unhealthy_level = traits,
        (N::Misconceptions, V::List(items)) => sections.misconceptions = items,
        (N::MisidentifiedAsThis, V::Misidentifications(records)) => {
            sections.misidentified_as_this = records;
        }
        (N::MayMisidentifyAs, V::Misidentifications(records)) => {
            sections.may_misidentify_as = records;
        }
        (N::WingTypes, V::WingTypes(records)) => sections.wing_types = records,
        (N::LineTypes, V::LineTypes(records)) => sections.line_types = records,
        (N::GrowthPractices, V::List(items)) => sections.growth_practices = items,
        (N::FamousExamples, V::List(items)) => sections.famous_examples = items,
        (name, value) => {
            return Err(format!(
                "sections[{}]: cannot hold a {}",
                name.title(),
                value.shape()
            ))
        }
    }
    Ok(())
}
