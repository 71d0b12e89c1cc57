use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::certainty::Certainty;

/// A host-supplied link between two records.
///
/// Only relations explicitly marked as contradictions influence regions and
/// hints; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecordRelation {
    pub source_id: String,
    pub target_id: String,
    /// Free-text label from the host, e.g. "disputes" or "replies-to".
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub is_contradiction: bool,
    pub confidence: Certainty,
}

impl RecordRelation {
    /// A relation the host has marked as contradictory.
    pub fn contradiction(source_id: &str, target_id: &str, confidence: f64) -> Self {
        Self {
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            label: "contradicts".to_string(),
            is_contradiction: true,
            confidence: Certainty::new(confidence),
        }
    }
}
