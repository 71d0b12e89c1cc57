use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;

/// Downstream exploration features the host asks for.
///
/// The core does not act on these; they are echoed verbatim in the
/// handoff payload so the exploration tool knows what was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorationFeatures {
    /// Investigate contradiction hints between records.
    pub contradiction_analysis: bool,
    /// Map uncertainty regions onto the source collection.
    pub uncertainty_mapping: bool,
    /// Walk the epistemic gaps in the summary.
    pub gap_analysis: bool,
    /// Compare record contents semantically. Off by default.
    pub semantic_comparison: bool,
}

impl Default for ExplorationFeatures {
    fn default() -> Self {
        Self {
            contradiction_analysis: defaults::DEFAULT_CONTRADICTION_ANALYSIS,
            uncertainty_mapping: defaults::DEFAULT_UNCERTAINTY_MAPPING,
            gap_analysis: defaults::DEFAULT_GAP_ANALYSIS,
            semantic_comparison: defaults::DEFAULT_SEMANTIC_COMPARISON,
        }
    }
}

impl ExplorationFeatures {
    /// Whether at least one feature is requested.
    pub fn any_enabled(&self) -> bool {
        self.contradiction_analysis
            || self.uncertainty_mapping
            || self.gap_analysis
            || self.semantic_comparison
    }
}
