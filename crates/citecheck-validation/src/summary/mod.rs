//! Epistemic summary generator.
//!
//! Overall certainty is the share of confidently validated records. "Confidently
//! validated" is the same predicate the handoff builder partitions on, so the
//! summary counts and the payload lists always agree.

pub mod gaps;
pub mod recommendation;

use citecheck_core::config::ValidationConfig;
use citecheck_core::models::{
    Certainty, EpistemicSummary, UncertaintyRegion, ValidationResult, ValidationState,
};

/// VALID and at or above the exploration threshold.
pub fn is_confidently_validated(result: &ValidationResult, config: &ValidationConfig) -> bool {
    result.state == ValidationState::Valid && result.score() >= config.exploration_threshold
}

pub fn generate(
    results: &[ValidationResult],
    regions: &[UncertaintyRegion],
    config: &ValidationConfig,
) -> EpistemicSummary {
    let total = results.len();
    let validated = results
        .iter()
        .filter(|r| is_confidently_validated(r, config))
        .count();
    let invalid = results.iter().filter(|r| r.state.is_invalid()).count();
    let uncertain = total - validated - invalid;

    let overall_certainty = if total == 0 {
        Certainty::ZERO
    } else {
        Certainty::new(validated as f64 / total as f64)
    };

    EpistemicSummary {
        total,
        validated,
        uncertain,
        invalid,
        overall_certainty,
        gaps: gaps::identify(results, regions),
        recommendation: recommendation::recommend(total, overall_certainty),
    }
}
