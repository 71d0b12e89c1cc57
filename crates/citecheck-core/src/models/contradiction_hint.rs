use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::certainty::Certainty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Same title, different primary authors.
    Authorship,
    /// Same title, different publication years.
    Temporal,
    /// The host marked the pair as contradictory.
    Relational,
}

impl ConflictType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictType::Authorship => "authorship",
            ConflictType::Temporal => "temporal",
            ConflictType::Relational => "relational",
        }
    }
}

/// A metadata-level conflict between two records. Never a claim about content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContradictionHint {
    pub record_a: String,
    pub record_b: String,
    pub conflict: ConflictType,
    pub description: String,
    pub confidence: Certainty,
    pub requires_semantic_analysis: bool,
}

impl ContradictionHint {
    /// Whether the hint links the two ids, in either order.
    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.record_a == a && self.record_b == b) || (self.record_a == b && self.record_b == a)
    }
}
