//! State classifier.
//!
//! Rules apply in order, first match wins:
//! 1. a malformed value at error severity → INCONSISTENT
//! 2. any other error → INCOMPLETE
//! 3. an exploration-flagged issue while the score is below the exploration
//!    threshold → UNCERTAIN
//! 4. score at or above the minimum valid certainty → VALID, else INCOMPLETE

use citecheck_core::config::ValidationConfig;
use citecheck_core::models::{CertaintyScore, IssueCategory, ValidationIssue, ValidationState};

pub fn classify(
    issues: &[ValidationIssue],
    certainty: &CertaintyScore,
    config: &ValidationConfig,
) -> ValidationState {
    let mut errors = issues.iter().filter(|i| i.is_error()).peekable();
    if errors.peek().is_some() {
        return if errors.any(|i| i.category == IssueCategory::Malformed) {
            ValidationState::Inconsistent
        } else {
            ValidationState::Incomplete
        };
    }

    let score = certainty.value();
    if score < config.exploration_threshold && issues.iter().any(|i| i.requires_exploration) {
        return ValidationState::Uncertain;
    }

    if score >= config.min_valid_certainty {
        ValidationState::Valid
    } else {
        ValidationState::Incomplete
    }
}
