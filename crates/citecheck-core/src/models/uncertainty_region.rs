use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::certainty::Certainty;

/// Why a group of records is uncertain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum UncertaintyCause {
    NoPersistentIdentifier,
    TemporalAmbiguity,
    LowCertainty,
    ContradictoryRelation,
}

impl UncertaintyCause {
    pub fn as_str(self) -> &'static str {
        match self {
            UncertaintyCause::NoPersistentIdentifier => "no-persistent-identifier",
            UncertaintyCause::TemporalAmbiguity => "temporal-ambiguity",
            UncertaintyCause::LowCertainty => "low-certainty",
            UncertaintyCause::ContradictoryRelation => "contradictory-relation",
        }
    }

    /// Fixed uncertainty level attached to every region of this cause.
    pub fn level(self) -> Certainty {
        Certainty::new(match self {
            UncertaintyCause::NoPersistentIdentifier => 0.6,
            UncertaintyCause::TemporalAmbiguity => 0.5,
            UncertaintyCause::LowCertainty => 0.8,
            UncertaintyCause::ContradictoryRelation => 0.9,
        })
    }
}

/// Exploration the downstream tool is invited to run on a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ExplorationSuggestion {
    IdentifierLookup,
    DateVerification,
    SourceComparison,
    MetadataReview,
    RelationReview,
}

/// Records sharing one named cause of low confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UncertaintyRegion {
    pub id: String,
    pub cause: UncertaintyCause,
    /// Affected record ids in batch order, without duplicates.
    pub record_ids: Vec<String>,
    pub description: String,
    pub suggested_explorations: Vec<ExplorationSuggestion>,
    pub level: Certainty,
}

impl UncertaintyRegion {
    pub fn contains(&self, record_id: &str) -> bool {
        self.record_ids.iter().any(|id| id == record_id)
    }
}
