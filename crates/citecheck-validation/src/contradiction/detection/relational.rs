//! Host relations explicitly marked as contradictions.

use std::collections::HashSet;

use citecheck_core::models::{ConflictType, ContradictionHint, RecordRelation};
use tracing::warn;

/// One hint per contradiction relation between two distinct records of the batch.
/// The relation's own confidence is carried over.
pub fn detect(relations: &[RecordRelation], known_ids: &HashSet<&str>) -> Vec<ContradictionHint> {
    relations
        .iter()
        .filter(|r| r.is_contradiction)
        .filter(|r| {
            if r.source_id == r.target_id {
                warn!(id = %r.source_id, "skipping contradiction relation from a record to itself");
                return false;
            }
            let known = known_ids.contains(r.source_id.as_str())
                && known_ids.contains(r.target_id.as_str());
            if !known {
                warn!(
                    source = %r.source_id,
                    target = %r.target_id,
                    "skipping contradiction relation with an endpoint outside the batch"
                );
            }
            known
        })
        .map(|r| ContradictionHint {
            record_a: r.source_id.clone(),
            record_b: r.target_id.clone(),
            conflict: ConflictType::Relational,
            description: if r.label.is_empty() {
                format!("{} and {} are marked as contradictory", r.source_id, r.target_id)
            } else {
                format!(
                    "{} and {} are marked as contradictory ({})",
                    r.source_id, r.target_id, r.label
                )
            },
            confidence: r.confidence,
            requires_semantic_analysis: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_relations_and_unknown_endpoints_are_skipped() {
        let known: HashSet<&str> = ["a", "b"].into_iter().collect();
        let relations = vec![
            RecordRelation::contradiction("a", "a", 0.9),
            RecordRelation::contradiction("a", "zz", 0.9),
            RecordRelation::contradiction("b", "a", 0.4),
        ];
        let hints = detect(&relations, &known);
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].record_a, "b");
        assert_eq!(hints[0].record_b, "a");
    }

    #[test]
    fn relations_not_marked_as_contradictions_are_ignored() {
        let known: HashSet<&str> = ["a", "b"].into_iter().collect();
        let mut relation = RecordRelation::contradiction("a", "b", 0.9);
        relation.is_contradiction = false;
        assert!(detect(&[relation], &known).is_empty());
    }
}
