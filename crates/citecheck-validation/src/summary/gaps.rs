//! Batch-level epistemic gaps.

use citecheck_core::models::{
    EpistemicGap, GapSeverity, GapType, UncertaintyRegion, ValidationResult, ValidationState,
};

/// Share of INCOMPLETE records above which the gap is high severity.
pub const INCOMPLETE_HIGH_SHARE: f64 = 0.3;
/// Share of records without DOI and ISBN above which the gap is reported.
pub const MISSING_IDENTIFIER_SHARE: f64 = 0.5;
/// Region level above which sources count as ambiguous.
pub const AMBIGUOUS_REGION_LEVEL: f64 = 0.7;

pub fn identify(results: &[ValidationResult], regions: &[UncertaintyRegion]) -> Vec<EpistemicGap> {
    let mut gaps = Vec::new();
    if results.is_empty() {
        return gaps;
    }
    let total = results.len() as f64;

    let incomplete = results
        .iter()
        .filter(|r| r.state == ValidationState::Incomplete)
        .count();
    if incomplete > 0 {
        let share = incomplete as f64 / total;
        gaps.push(EpistemicGap {
            gap_type: GapType::IncompleteMetadata,
            severity: if share > INCOMPLETE_HIGH_SHARE {
                GapSeverity::High
            } else {
                GapSeverity::Medium
            },
            description: format!("{incomplete} record(s) are missing required metadata"),
            remediation: "Fill in the missing required fields in the source library".to_string(),
            // A data-entry problem, not something exploration can resolve.
            explorable_downstream: false,
        });
    }

    let unidentified = results.iter().filter(|r| r.record.lacks_doi_and_isbn()).count();
    if unidentified as f64 / total > MISSING_IDENTIFIER_SHARE {
        gaps.push(EpistemicGap {
            gap_type: GapType::MissingIdentifiers,
            severity: GapSeverity::Medium,
            description: format!("{unidentified} record(s) have neither a DOI nor an ISBN"),
            remediation: "Look up DOIs or ISBNs so records can be resolved externally".to_string(),
            explorable_downstream: true,
        });
    }

    if let Some(worst) = regions
        .iter()
        .filter(|r| r.level.value() > AMBIGUOUS_REGION_LEVEL)
        .max_by(|a, b| a.level.value().total_cmp(&b.level.value()))
    {
        gaps.push(EpistemicGap {
            gap_type: GapType::AmbiguousSources,
            severity: GapSeverity::High,
            description: format!(
                "highly uncertain region detected: {} ({} record(s))",
                worst.cause.as_str(),
                worst.record_ids.len()
            ),
            remediation: "Explore the flagged regions to disambiguate the sources".to_string(),
            explorable_downstream: true,
        });
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use citecheck_core::models::{
        Certainty, CertaintyFactors, CertaintyScore, UncertaintyCause,
    };
    use citecheck_core::record::{Record, RecordKind};

    fn result(id: usize, state: ValidationState, with_doi: bool) -> ValidationResult {
        let mut record = Record::new(format!("r{id}"), RecordKind::JournalArticle, "T");
        if with_doi {
            record.doi = Some(format!("10.1000/{id}"));
        }
        ValidationResult {
            record,
            state,
            issues: Vec::new(),
            certainty: CertaintyScore {
                score: Certainty::new(0.9),
                factors: CertaintyFactors {
                    structural: Certainty::ONE,
                    consistency: Certainty::ONE,
                    referential: Certainty::ONE,
                },
            },
            validated_at: Utc::now(),
        }
    }

    /// `incomplete` INCOMPLETE records out of `total`, all carrying a DOI.
    fn batch_with_incomplete(incomplete: usize, total: usize) -> Vec<ValidationResult> {
        (0..total)
            .map(|i| {
                let state = if i < incomplete {
                    ValidationState::Incomplete
                } else {
                    ValidationState::Valid
                };
                result(i, state, true)
            })
            .collect()
    }

    /// `missing` records without DOI or ISBN out of `total`, all VALID.
    fn batch_without_identifiers(missing: usize, total: usize) -> Vec<ValidationResult> {
        (0..total)
            .map(|i| result(i, ValidationState::Valid, i >= missing))
            .collect()
    }

    fn region(level: f64) -> UncertaintyRegion {
        UncertaintyRegion {
            id: "region:test".to_string(),
            cause: UncertaintyCause::LowCertainty,
            record_ids: vec!["r0".to_string()],
            description: String::new(),
            suggested_explorations: Vec::new(),
            level: Certainty::new(level),
        }
    }

    #[test]
    fn empty_batch_has_no_gaps() {
        assert!(identify(&[], &[region(0.9)]).is_empty());
    }

    #[test]
    fn incomplete_share_at_thirty_percent_is_medium() {
        let gaps = identify(&batch_with_incomplete(3, 10), &[]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_type, GapType::IncompleteMetadata);
        assert_eq!(gaps[0].severity, GapSeverity::Medium);
        assert!(!gaps[0].explorable_downstream);
    }

    #[test]
    fn incomplete_share_above_thirty_percent_is_high() {
        let gaps = identify(&batch_with_incomplete(4, 10), &[]);
        assert_eq!(gaps[0].gap_type, GapType::IncompleteMetadata);
        assert_eq!(gaps[0].severity, GapSeverity::High);
    }

    #[test]
    fn half_the_batch_without_identifiers_is_not_a_gap() {
        assert!(identify(&batch_without_identifiers(4, 8), &[]).is_empty());
    }

    #[test]
    fn majority_without_identifiers_is_an_explorable_gap() {
        let gaps = identify(&batch_without_identifiers(5, 9), &[]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_type, GapType::MissingIdentifiers);
        assert_eq!(gaps[0].severity, GapSeverity::Medium);
        assert!(gaps[0].explorable_downstream);
        assert!(gaps[0].description.starts_with('5'));
    }

    #[test]
    fn ambiguous_sources_need_a_region_above_the_level() {
        let batch = batch_without_identifiers(0, 2);
        assert!(identify(&batch, &[region(0.7)]).is_empty());

        let gaps = identify(&batch, &[region(0.7), region(0.8)]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_type, GapType::AmbiguousSources);
        assert_eq!(gaps[0].severity, GapSeverity::High);
        assert!(gaps[0].explorable_downstream);
    }
}
