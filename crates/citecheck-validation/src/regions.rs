//! Uncertainty region detector.
//!
//! Groups the records of a batch by *cause* of uncertainty. Each cause is
//! evaluated independently, so a record can sit in several regions. Regions
//! with no records are omitted.

use std::collections::{BTreeSet, HashMap};

use citecheck_core::config::ValidationConfig;
use citecheck_core::models::{
    ExplorationSuggestion, RecordRelation, UncertaintyCause, UncertaintyRegion, ValidationResult,
};
use citecheck_core::record::RecordField;
use tracing::{debug, warn};

/// Detect all regions for a batch, in cause order: no persistent identifier,
/// temporal ambiguity, low certainty, contradictory relation.
///
/// `relations` is optional; without it the contradictory-relation region is
/// never produced.
pub fn detect(
    results: &[ValidationResult],
    relations: Option<&[RecordRelation]>,
    config: &ValidationConfig,
) -> Vec<UncertaintyRegion> {
    let mut regions = Vec::new();

    let unidentified = ids_where(results, |r| !r.record.has_persistent_identifier());
    regions.extend(region(
        UncertaintyCause::NoPersistentIdentifier,
        unidentified,
        |n| format!("{n} record(s) carry no DOI, ISBN, or URL and cannot be resolved externally"),
        vec![ExplorationSuggestion::IdentifierLookup, ExplorationSuggestion::SourceComparison],
    ));

    let undated = ids_where(results, is_temporally_ambiguous);
    regions.extend(region(
        UncertaintyCause::TemporalAmbiguity,
        undated,
        |n| format!("{n} record(s) have no date or a year outside the plausible range"),
        vec![ExplorationSuggestion::DateVerification],
    ));

    let low = ids_where(results, |r| r.score() < config.low_certainty_threshold);
    regions.extend(region(
        UncertaintyCause::LowCertainty,
        low,
        |n| {
            format!(
                "{n} record(s) score below {:.2} overall certainty",
                config.low_certainty_threshold
            )
        },
        vec![ExplorationSuggestion::MetadataReview, ExplorationSuggestion::SourceComparison],
    ));

    if let Some(relations) = relations {
        let contradicted = contradicted_ids(results, relations);
        regions.extend(region(
            UncertaintyCause::ContradictoryRelation,
            contradicted,
            |n| format!("{n} record(s) are linked by relations marked as contradictions"),
            vec![ExplorationSuggestion::RelationReview, ExplorationSuggestion::SourceComparison],
        ));
    }

    debug!(
        batch_size = results.len(),
        regions = regions.len(),
        "uncertainty regions detected"
    );
    regions
}

/// Missing date, or a parseable year outside the plausible range.
/// Malformed dates are left to the classifier.
fn is_temporally_ambiguous(result: &ValidationResult) -> bool {
    let record = &result.record;
    if !record.has(RecordField::Date) {
        return true;
    }
    record.partial_date().is_some_and(|d| !d.is_plausible())
}

fn ids_where(
    results: &[ValidationResult],
    predicate: impl Fn(&ValidationResult) -> bool,
) -> Vec<String> {
    results
        .iter()
        .filter(|&r| predicate(r))
        .map(|r| r.record_id().to_string())
        .collect()
}

/// Endpoints of contradiction relations, in batch order.
fn contradicted_ids(results: &[ValidationResult], relations: &[RecordRelation]) -> Vec<String> {
    let positions: HashMap<&str, usize> = results
        .iter()
        .enumerate()
        .map(|(i, r)| (r.record_id(), i))
        .collect();

    let mut hit: BTreeSet<usize> = BTreeSet::new();
    for relation in relations.iter().filter(|r| r.is_contradiction) {
        match (
            positions.get(relation.source_id.as_str()),
            positions.get(relation.target_id.as_str()),
        ) {
            (Some(&a), Some(&b)) => {
                hit.insert(a);
                hit.insert(b);
            }
            _ => warn!(
                source = %relation.source_id,
                target = %relation.target_id,
                "contradiction relation references a record outside the batch"
            ),
        }
    }

    hit.into_iter()
        .map(|i| results[i].record_id().to_string())
        .collect()
}

fn region(
    cause: UncertaintyCause,
    record_ids: Vec<String>,
    describe: impl FnOnce(usize) -> String,
    suggested_explorations: Vec<ExplorationSuggestion>,
) -> Option<UncertaintyRegion> {
    if record_ids.is_empty() {
        return None;
    }
    Some(UncertaintyRegion {
        id: format!("region:{}", cause.as_str()),
        cause,
        description: describe(record_ids.len()),
        record_ids,
        suggested_explorations,
        level: cause.level(),
    })
}
