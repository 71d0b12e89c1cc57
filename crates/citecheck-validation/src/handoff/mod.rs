//! Handoff payload builder, the only component that fixes the wire shape.

pub mod reasons;

use chrono::{DateTime, Utc};
use citecheck_core::config::ValidationConfig;
use citecheck_core::constants::HANDOFF_FORMAT_VERSION;
use citecheck_core::models::{
    ContradictionHint, EpistemicSummary, HandoffPayload, InvalidCitation, UncertaintyRegion,
    ValidatedCitation, ValidationDigest, ValidationResult,
};
use tracing::info;
use uuid::Uuid;

use crate::handoff_span;
use crate::summary::is_confidently_validated;

/// Assembles one versioned payload per validation run.
pub struct HandoffBuilder {
    config: ValidationConfig,
}

impl HandoffBuilder {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Build a payload stamped with the current time and a fresh run id.
    pub fn build(
        &self,
        results: &[ValidationResult],
        regions: Vec<UncertaintyRegion>,
        hints: Vec<ContradictionHint>,
        summary: EpistemicSummary,
    ) -> HandoffPayload {
        self.build_at(results, regions, hints, summary, Utc::now(), Uuid::new_v4())
    }

    /// Build with an explicit timestamp and run id (injectable for testing).
    pub fn build_at(
        &self,
        results: &[ValidationResult],
        regions: Vec<UncertaintyRegion>,
        hints: Vec<ContradictionHint>,
        summary: EpistemicSummary,
        now: DateTime<Utc>,
        run_id: Uuid,
    ) -> HandoffPayload {
        let _span = handoff_span!(run_id).entered();

        let (validated, rest): (Vec<&ValidationResult>, Vec<&ValidationResult>) = results
            .iter()
            .partition(|r| is_confidently_validated(r, &self.config));

        let validated_citations: Vec<ValidatedCitation> = validated
            .into_iter()
            .map(|r| ValidatedCitation {
                record: r.record.clone(),
                validation_result: ValidationDigest::from(r),
                certainty: r.certainty.score,
                certainties: reasons::certainties(r),
            })
            .collect();

        let invalid_citations: Vec<InvalidCitation> = rest
            .into_iter()
            .map(|r| InvalidCitation {
                record: r.record.clone(),
                validation_result: ValidationDigest::from(r),
                reason: reasons::reason(r, &self.config),
                uncertainties: reasons::uncertainties(r),
            })
            .collect();

        info!(
            validated = validated_citations.len(),
            invalid = invalid_citations.len(),
            regions = regions.len(),
            hints = hints.len(),
            "handoff payload assembled"
        );

        HandoffPayload {
            version: HANDOFF_FORMAT_VERSION.to_string(),
            run_id: run_id.to_string(),
            timestamp: now,
            validated_citations,
            invalid_citations,
            uncertainty_regions: regions,
            contradiction_hints: hints,
            epistemic_summary: summary,
            exploration_features: self.config.features,
        }
    }
}

impl Default for HandoffBuilder {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
