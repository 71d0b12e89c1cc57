use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::certainty::CertaintyScore;
use super::issue::{Severity, ValidationIssue};
use crate::record::Record;

/// Coarse classification of a validated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationState {
    Valid,
    Incomplete,
    Inconsistent,
    Uncertain,
}

impl ValidationState {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationState::Valid => "VALID",
            ValidationState::Incomplete => "INCOMPLETE",
            ValidationState::Inconsistent => "INCONSISTENT",
            ValidationState::Uncertain => "UNCERTAIN",
        }
    }

    /// INCOMPLETE and INCONSISTENT records are invalid; UNCERTAIN is not.
    pub fn is_invalid(self) -> bool {
        matches!(self, ValidationState::Incomplete | ValidationState::Inconsistent)
    }
}

impl std::fmt::Display for ValidationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one record.
///
/// Owns a snapshot of the record; nothing points back at the host's copy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub record: Record,
    pub state: ValidationState,
    pub issues: Vec<ValidationIssue>,
    pub certainty: CertaintyScore,
    pub validated_at: DateTime<Utc>,
}

impl ValidationResult {
    pub fn record_id(&self) -> &str {
        &self.record.id
    }

    /// Overall certainty as a raw value.
    pub fn score(&self) -> f64 {
        self.certainty.value()
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    /// The most severe issue, earliest first among equals.
    pub fn leading_issue(&self) -> Option<&ValidationIssue> {
        [Severity::Error, Severity::Warning, Severity::Info]
            .into_iter()
            .find_map(|s| self.issues.iter().find(|i| i.severity == s))
    }
}
