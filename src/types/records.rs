//! Multi-field records parsed from the wing, line and misidentification sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wing records keyed by `"Type N: Name"`.
pub type WingTypes = BTreeMap<String, WingType>;

/// Line (integration/disintegration) records keyed by `"Type N: Name"`.
pub type LineTypes = BTreeMap<String, LineType>;

/// An adjacent type's influence on this type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WingType {
    pub description: String,
    /// Alias as written in the header, parentheses included.
    pub alias: String,
    pub combination: WingCombination,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WingCombination {
    pub personality: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
}

/// A connected type reached along the lines of the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineType {
    pub description: String,
    pub dynamics: LineDynamics,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineDynamics {
    pub healthy: String,
    pub average: String,
    pub unhealthy: String,
}

/// A type that is easily confused with another.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Misidentification {
    /// The `Type N: Name` label, kept verbatim.
    #[serde(rename = "type")]
    pub type_label: String,
    pub shared_traits: Vec<String>,
    pub differences: Differences,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Differences {
    pub core_motivation: String,
    pub behavioral: String,
    pub stress: String,
}
