//! Contradiction detection strategy registry.
//!
//! Group strategies run against every duplicate-title group; the relational
//! strategy runs against the host's relation list.

pub mod authorship;
pub mod relational;
pub mod temporal;

use citecheck_core::models::ContradictionHint;

use super::grouping::TitleGroup;

/// Run every group strategy and collect all hints, authorship first.
pub fn detect_all(group: &TitleGroup<'_>) -> Vec<ContradictionHint> {
    let mut hints = authorship::detect(group);
    hints.extend(temporal::detect(group));
    hints
}
