use serde::{Deserialize, Serialize};

use super::LeafSubstitution;

/// Which parts of a page's HTML a group may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupHtml {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "output")]
    Output,
    #[serde(rename = "inputOutput")]
    InputOutput,
}

/// When the engine applies a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupMode {
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "manual")]
    Manual,
    #[default]
    #[serde(rename = "auto&manual")]
    AutoAndManual,
}

/// Pass-through group metadata; the pipeline never computes these
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDefaults {
    pub urls: Vec<String>,
    pub html: GroupHtml,
    pub enabled: bool,
    pub mode: GroupMode,
}

impl Default for GroupDefaults {
    fn default() -> Self {
        Self {
            urls: vec![],
            html: GroupHtml::None,
            enabled: true,
            mode: GroupMode::AutoAndManual,
        }
    }
}

/// A named, ordered list of leaf substitutions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionGroup {
    pub name: String,
    pub urls: Vec<String>,
    pub substitutions: Vec<LeafSubstitution>,
    pub html: GroupHtml,
    pub enabled: bool,
    pub mode: GroupMode,
}

impl SubstitutionGroup {
    pub fn new(
        name: impl Into<String>,
        substitutions: Vec<LeafSubstitution>,
        defaults: &GroupDefaults,
    ) -> Self {
        Self {
            name: name.into(),
            urls: defaults.urls.clone(),
            substitutions,
            html: defaults.html,
            enabled: defaults.enabled,
            mode: defaults.mode,
        }
    }
}

/// The document consumed by the substitution engine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedRules {
    pub groups: Vec<SubstitutionGroup>,
}

impl GeneratedRules {
    /// Total number of leaf substitutions across all groups
    pub fn leaf_count(&self) -> usize {
        self.groups.iter().map(|g| g.substitutions.len()).sum()
    }
}
