use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::certainty::Certainty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum GapType {
    IncompleteMetadata,
    MissingIdentifiers,
    AmbiguousSources,
}

impl GapType {
    pub fn as_str(self) -> &'static str {
        match self {
            GapType::IncompleteMetadata => "incomplete-metadata",
            GapType::MissingIdentifiers => "missing-identifiers",
            GapType::AmbiguousSources => "ambiguous-sources",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    Low,
    Medium,
    High,
}

/// A batch-level hole in what can be known about the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EpistemicGap {
    pub gap_type: GapType,
    pub severity: GapSeverity,
    pub description: String,
    pub remediation: String,
    /// Whether the exploration tool can help close this gap.
    pub explorable_downstream: bool,
}

/// Aggregate view over one validation run.
///
/// `validated + uncertain + invalid == total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EpistemicSummary {
    pub total: usize,
    pub validated: usize,
    pub uncertain: usize,
    pub invalid: usize,
    pub overall_certainty: Certainty,
    pub gaps: Vec<EpistemicGap>,
    pub recommendation: String,
}

impl EpistemicSummary {
    pub fn gap(&self, gap_type: GapType) -> Option<&EpistemicGap> {
        self.gaps.iter().find(|g| g.gap_type == gap_type)
    }
}
