//! Same title, different publication years.

use std::collections::BTreeSet;

use citecheck_core::models::{Certainty, ConflictType, ContradictionHint};
use citecheck_core::record::Record;

use crate::contradiction::grouping::TitleGroup;

pub const CONFIDENCE: f64 = 0.8;

/// When the known years of a group disagree, every pair gets a hint. A year
/// mismatch is usually a metadata slip, so no semantic analysis is requested.
/// Records without a parseable year do not count toward the disagreement.
pub fn detect(group: &TitleGroup<'_>) -> Vec<ContradictionHint> {
    let years: BTreeSet<i32> = group.records.iter().filter_map(|r| r.year()).collect();
    if years.len() <= 1 {
        return Vec::new();
    }

    group
        .pairs()
        .map(|(a, b)| ContradictionHint {
            record_a: a.id.clone(),
            record_b: b.id.clone(),
            conflict: ConflictType::Temporal,
            description: format!(
                "'{}' is dated {} in {} and {} in {}",
                group.normalized_title,
                display_year(a),
                a.id,
                display_year(b),
                b.id
            ),
            confidence: Certainty::new(CONFIDENCE),
            requires_semantic_analysis: false,
        })
        .collect()
}

fn display_year(record: &Record) -> String {
    record
        .year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "no year".to_string())
}
