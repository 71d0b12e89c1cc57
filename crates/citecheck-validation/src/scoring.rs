//! Certainty scorer.
//!
//! Overall score: `0.5 × structural + 0.3 × consistency + 0.2 × referential`.
//!
//! - **Structural**: required fields present / required fields (1.0 when none)
//! - **Consistency**: `1 − e / (e + 2)` for `e` error-severity issues, so one
//!   error costs a third of the factor and zero errors leave it at 1.0
//! - **Referential**: 0.5 baseline, +0.3 DOI, +0.2 ISBN, +0.1 URL for
//!   well-formed identifiers, capped at 1.0

use citecheck_core::models::{Certainty, CertaintyFactors, CertaintyScore, ValidationIssue};
use citecheck_core::record::{Record, RecordField};

use crate::rules::{patterns, structural};

pub const STRUCTURAL_WEIGHT: f64 = 0.5;
pub const CONSISTENCY_WEIGHT: f64 = 0.3;
pub const REFERENTIAL_WEIGHT: f64 = 0.2;

/// Smoothing constant in the consistency penalty.
pub const CONSISTENCY_SMOOTHING: f64 = 2.0;

pub const REFERENTIAL_BASELINE: f64 = 0.5;
pub const DOI_BONUS: f64 = 0.3;
pub const ISBN_BONUS: f64 = 0.2;
pub const URL_BONUS: f64 = 0.1;

pub fn structural_factor(record: &Record) -> f64 {
    let required = record.kind.required_fields().len();
    if required == 0 {
        return 1.0;
    }
    structural::present_required(record) as f64 / required as f64
}

pub fn consistency_factor(issues: &[ValidationIssue]) -> f64 {
    let errors = issues.iter().filter(|i| i.is_error()).count() as f64;
    1.0 - errors / (errors + CONSISTENCY_SMOOTHING)
}

pub fn referential_factor(record: &Record) -> f64 {
    let mut factor = REFERENTIAL_BASELINE;
    if record.text(RecordField::Doi).is_some_and(patterns::is_well_formed_doi) {
        factor += DOI_BONUS;
    }
    if record.text(RecordField::Isbn).is_some_and(patterns::is_well_formed_isbn) {
        factor += ISBN_BONUS;
    }
    if record.text(RecordField::Url).is_some_and(patterns::is_well_formed_url) {
        factor += URL_BONUS;
    }
    factor.min(1.0)
}

/// Score a record from its issues. Every value is clamped on the way in.
pub fn score(record: &Record, issues: &[ValidationIssue]) -> CertaintyScore {
    let structural = structural_factor(record);
    let consistency = consistency_factor(issues);
    let referential = referential_factor(record);

    let overall = STRUCTURAL_WEIGHT * structural
        + CONSISTENCY_WEIGHT * consistency
        + REFERENTIAL_WEIGHT * referential;

    CertaintyScore {
        score: Certainty::new(overall),
        factors: CertaintyFactors {
            structural: Certainty::new(structural),
            consistency: Certainty::new(consistency),
            referential: Certainty::new(referential),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citecheck_core::models::IssueCategory;
    use citecheck_core::record::RecordKind;

    #[test]
    fn weights_sum_to_one() {
        assert!((STRUCTURAL_WEIGHT + CONSISTENCY_WEIGHT + REFERENTIAL_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn consistency_is_smoothed() {
        assert_eq!(consistency_factor(&[]), 1.0);
        let one = [ValidationIssue::error(RecordField::Date, IssueCategory::Malformed, "bad")];
        assert!((consistency_factor(&one) - 2.0 / 3.0).abs() < 1e-12);
        let warning = [ValidationIssue::warning(RecordField::Pages, IssueCategory::Suspicious, "odd")];
        assert_eq!(consistency_factor(&warning), 1.0);
    }

    #[test]
    fn referential_bonuses_cap_at_one() {
        let mut record = Record::new("r", RecordKind::Book, "T");
        assert_eq!(referential_factor(&record), 0.5);
        record.url = Some("https://example.org".into());
        assert!((referential_factor(&record) - 0.6).abs() < 1e-12);
        record.doi = Some("10.1000/182".into());
        record.isbn = Some("9783161484100".into());
        assert_eq!(referential_factor(&record), 1.0);
    }

    #[test]
    fn malformed_identifiers_earn_nothing() {
        let mut record = Record::new("r", RecordKind::Book, "T");
        record.doi = Some("doi please".into());
        record.url = Some("not a url".into());
        assert_eq!(referential_factor(&record), 0.5);
    }
}
