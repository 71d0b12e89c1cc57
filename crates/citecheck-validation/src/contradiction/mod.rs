//! Metadata-level contradiction detection.
//!
//! Records are grouped by normalized title; pairs inside a duplicate-title
//! group are checked for differing primary authors and differing years.
//! Host relations explicitly marked as contradictions are passed through as
//! relational hints. Nothing here looks at what a record *claims*.

pub mod detection;
pub mod grouping;

use std::collections::HashSet;

use citecheck_core::config::ValidationConfig;
use citecheck_core::errors::{CitecheckError, CitecheckResult};
use citecheck_core::models::{ContradictionHint, RecordRelation, ValidationResult};
use tracing::debug;

use crate::contradiction_span;

/// Orchestrates grouping, the per-group strategies, and relational hints.
pub struct ContradictionDetector {
    max_group_size: usize,
}

impl ContradictionDetector {
    /// `max_group_size` bounds the quadratic pairwise pass; larger groups
    /// are rejected instead of silently slowing down.
    pub fn new(max_group_size: usize) -> Self {
        Self { max_group_size }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.max_title_group_size)
    }

    pub fn max_group_size(&self) -> usize {
        self.max_group_size
    }

    /// Detect hints across a batch.
    ///
    /// Group hints come first (groups in first-appearance order, pairs in
    /// batch order), followed by relational hints in relation order.
    pub fn detect(
        &self,
        results: &[ValidationResult],
        relations: Option<&[RecordRelation]>,
    ) -> CitecheckResult<Vec<ContradictionHint>> {
        let _span = contradiction_span!(results.len()).entered();

        let groups = grouping::group_by_title(results.iter().map(|r| &r.record));

        let mut hints = Vec::new();
        for group in groups.iter().filter(|g| g.is_duplicate()) {
            if group.len() > self.max_group_size {
                return Err(CitecheckError::ContradictionGroupTooLarge {
                    title: group.normalized_title.clone(),
                    size: group.len(),
                    cap: self.max_group_size,
                });
            }
            hints.extend(detection::detect_all(group));
        }

        if let Some(relations) = relations {
            let known: HashSet<&str> = results.iter().map(|r| r.record_id()).collect();
            hints.extend(detection::relational::detect(relations, &known));
        }

        debug!(hints = hints.len(), "contradiction detection complete");
        Ok(hints)
    }
}

impl Default for ContradictionDetector {
    fn default() -> Self {
        Self::from_config(&ValidationConfig::default())
    }
}
