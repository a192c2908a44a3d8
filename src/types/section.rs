//! Canonical section names and the values their parsers produce.

use std::fmt;

use super::content::LevelTrait;
use super::records::{LineTypes, Misidentification, WingTypes};

/// The closed set of bracketed section headers a type document may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionName {
    TypeSummary,
    LongDescription,
    MightBe,
    ProbablyNot,
    HealthyLevel,
    AverageLevel,
    UnhealthyLevel,
    Misconceptions,
    MisidentifiedAsThis,
    MayMisidentifyAs,
    WingTypes,
    LineTypes,
    GrowthPractices,
    FamousExamples,
}

impl SectionName {
    pub const ALL: [SectionName; 14] = [
        SectionName::TypeSummary,
        SectionName::LongDescription,
        SectionName::MightBe,
        SectionName::ProbablyNot,
        SectionName::HealthyLevel,
        SectionName::AverageLevel,
        SectionName::UnhealthyLevel,
        SectionName::Misconceptions,
        SectionName::MisidentifiedAsThis,
        SectionName::MayMisidentifyAs,
        SectionName::WingTypes,
        SectionName::LineTypes,
        SectionName::GrowthPractices,
        SectionName::FamousExamples,
    ];

    /// The header text as written between the brackets.
    pub fn title(self) -> &'static str {
        match self {
            SectionName::TypeSummary => "Type Summary",
            SectionName::LongDescription => "Long Description",
            SectionName::MightBe => "You Might Be This Type If...",
            SectionName::ProbablyNot => "You're Probably Not This Type If...",
            SectionName::HealthyLevel => "Healthy Level of Development",
            SectionName::AverageLevel => "Average Level of Development",
            SectionName::UnhealthyLevel => "Unhealthy Level of Development",
            SectionName::Misconceptions => "Common Misconceptions About This Type",
            SectionName::MisidentifiedAsThis => "Types That May Misidentify as This Type",
            SectionName::MayMisidentifyAs => "This Type May Misidentify as...",
            SectionName::WingTypes => "Wing Types",
            SectionName::LineTypes => "Line Types",
            SectionName::GrowthPractices => "Growth Practices",
            SectionName::FamousExamples => "Famous Examples",
        }
    }

    /// Look up a header by its exact title.
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.title() == title)
    }

    /// Which parser handles this section's lines.
    pub fn kind(self) -> SectionKind {
        match self {
            SectionName::TypeSummary | SectionName::LongDescription => SectionKind::Text,
            SectionName::MightBe
            | SectionName::ProbablyNot
            | SectionName::GrowthPractices
            | SectionName::FamousExamples => SectionKind::List,
            SectionName::Misconceptions => SectionKind::Misconceptions,
            SectionName::HealthyLevel | SectionName::AverageLevel | SectionName::UnhealthyLevel => {
                SectionKind::Traits
            }
            SectionName::MisidentifiedAsThis | SectionName::MayMisidentifyAs => {
                SectionKind::Misidentifications
            }
            SectionName::WingTypes => SectionKind::WingTypes,
            SectionName::LineTypes => SectionKind::LineTypes,
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Structural kind of a section's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Free text joined into one block.
    Text,
    /// Strict bullet or numbered list.
    List,
    /// Numbered list whose bold-headed entries may continue on later lines.
    Misconceptions,
    /// `- Trait: explanation` bullets.
    Traits,
    WingTypes,
    LineTypes,
    Misidentifications,
}

impl SectionKind {
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::List => "list",
            SectionKind::Misconceptions => "misconceptions",
            SectionKind::Traits => "traits",
            SectionKind::WingTypes => "wing-types",
            SectionKind::LineTypes => "line-types",
            SectionKind::Misidentifications => "misidentifications",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed section, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    Text(String),
    List(Vec<String>),
    Traits(Vec<LevelTrait>),
    WingTypes(WingTypes),
    LineTypes(LineTypes),
    Misidentifications(Vec<Misidentification>),
}

impl SectionValue {
    /// The value a section of this kind takes when it is absent or empty.
    pub fn empty(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Text => SectionValue::Text(String::new()),
            SectionKind::List | SectionKind::Misconceptions => SectionValue::List(Vec::new()),
            SectionKind::Traits => SectionValue::Traits(Vec::new()),
            SectionKind::WingTypes => SectionValue::WingTypes(WingTypes::new()),
            SectionKind::LineTypes => SectionValue::LineTypes(LineTypes::new()),
            SectionKind::Misidentifications => SectionValue::Misidentifications(Vec::new()),
        }
    }

    /// Name of the shape, for schema diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            SectionValue::Text(_) => "text",
            SectionValue::List(_) => "list",
            SectionValue::Traits(_) => "trait list",
            SectionValue::WingTypes(_) => "wing record map",
            SectionValue::LineTypes(_) => "line record map",
            SectionValue::Misidentifications(_) => "misidentification list",
        }
    }
}
