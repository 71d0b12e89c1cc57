use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::certainty::{Certainty, CertaintyScore};
use super::contradiction_hint::ContradictionHint;
use super::epistemic_summary::EpistemicSummary;
use super::issue::ValidationIssue;
use super::uncertainty_region::UncertaintyRegion;
use super::validation_result::{ValidationResult, ValidationState};
use crate::config::ExplorationFeatures;
use crate::errors::CitecheckResult;
use crate::record::Record;

/// A validation result without its record, as it appears on the wire next to
/// the record it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDigest {
    pub state: ValidationState,
    pub issues: Vec<ValidationIssue>,
    pub certainty: CertaintyScore,
    pub timestamp: DateTime<Utc>,
}

impl From<&ValidationResult> for ValidationDigest {
    fn from(result: &ValidationResult) -> Self {
        Self {
            state: result.state,
            issues: result.issues.clone(),
            certainty: result.certainty,
            timestamp: result.validated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCitation {
    pub record: Record,
    pub validation_result: ValidationDigest,
    pub certainty: Certainty,
    /// Short statements on why the record is trusted.
    pub certainties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvalidCitation {
    pub record: Record,
    pub validation_result: ValidationDigest,
    pub reason: String,
    /// Short statements on what makes the record uncertain.
    pub uncertainties: Vec<String>,
}

/// The versioned export consumed by the exploration tool.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    pub version: String,
    pub run_id: String,
    pub timestamp: DateTime<Utc>,
    pub validated_citations: Vec<ValidatedCitation>,
    pub invalid_citations: Vec<InvalidCitation>,
    pub uncertainty_regions: Vec<UncertaintyRegion>,
    pub contradiction_hints: Vec<ContradictionHint>,
    pub epistemic_summary: EpistemicSummary,
    pub exploration_features: ExplorationFeatures,
}

impl HandoffPayload {
    pub fn to_json(&self) -> CitecheckResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> CitecheckResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> CitecheckResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
