//! Same title, different primary authors.

use std::collections::BTreeSet;

use citecheck_core::models::{Certainty, ConflictType, ContradictionHint};
use citecheck_core::record::Record;

use crate::contradiction::grouping::TitleGroup;

pub const CONFIDENCE: f64 = 0.7;

/// Case-folded family name of the primary author.
fn primary_family_name(record: &Record) -> Option<String> {
    record
        .primary_author()
        .and_then(|c| c.family_name())
        .map(str::to_lowercase)
}

/// When the group credits more than one distinct primary author, every pair
/// gets a hint: the records may be distinct works or a data-entry error, and
/// only semantic analysis can tell.
pub fn detect(group: &TitleGroup<'_>) -> Vec<ContradictionHint> {
    let names: BTreeSet<String> = group.records.iter().filter_map(|r| primary_family_name(r)).collect();
    if names.len() <= 1 {
        return Vec::new();
    }

    group
        .pairs()
        .map(|(a, b)| ContradictionHint {
            record_a: a.id.clone(),
            record_b: b.id.clone(),
            conflict: ConflictType::Authorship,
            description: format!(
                "'{}' is credited to {} in {} and to {} in {}",
                group.normalized_title,
                display_name(a),
                a.id,
                display_name(b),
                b.id
            ),
            confidence: Certainty::new(CONFIDENCE),
            requires_semantic_analysis: true,
        })
        .collect()
}

fn display_name(record: &Record) -> String {
    record
        .primary_author()
        .and_then(|c| c.family_name())
        .unwrap_or("no primary author")
        .to_string()
}
