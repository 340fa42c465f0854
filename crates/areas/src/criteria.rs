use serde::{Deserialize, Serialize};

/// Current values of the three filter controls for one update cycle.
///
/// Constructed fresh each cycle from the dropdowns; never persisted.
/// An empty list means no filtering on that axis. Single-select controls
/// send one-element lists; equality and one-element membership agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub modality: Vec<String>,
    /// Values for the variant's secondary column (phase or use).
    #[serde(default)]
    pub secondary: Vec<String>,
    #[serde(default)]
    pub uf: Vec<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.modality.is_empty() && self.secondary.is_empty() && self.uf.is_empty()
    }
}
