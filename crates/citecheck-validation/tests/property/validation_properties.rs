use chrono::{TimeZone, Utc};
use citecheck_core::models::ValidationState;
use citecheck_core::record::{Creator, CreatorRole, Record, RecordKind};
use citecheck_validation::ValidationEngine;
use proptest::prelude::*;
use uuid::Uuid;

fn kind() -> impl Strategy<Value = RecordKind> {
    prop::sample::select(RecordKind::ALL.to_vec())
}

fn maybe(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(values).prop_map(str::to_string))
}

fn record(id: String) -> impl Strategy<Value = Record> {
    (
        kind(),
        "[A-Za-z ]{0,12}",
        prop::collection::vec("[A-Za-z]{0,6}", 0..3),
        maybe(&["2020", "1999-12", "2024-02-29", "0380", "2024-13", "soon", ""]),
        maybe(&["Press", " "]),
        maybe(&["Journal"]),
        maybe(&["10.1000/182", "10.12/x", "nope"]),
        maybe(&["978-3-16-148410-0", "123"]),
        maybe(&["https://example.org", "ftp:/bad"]),
        maybe(&["1-10", "x"]),
    )
        .prop_map(
            move |(kind, title, surnames, date, publisher, venue, doi, isbn, url, pages)| {
                let mut r = Record::new(id.clone(), kind, title);
                r.creators = surnames
                    .iter()
                    .map(|s| Creator::person(CreatorRole::Author, None, s))
                    .collect();
                r.date = date;
                r.publisher = publisher;
                r.publication_venue = venue;
                r.doi = doi;
                r.isbn = isbn;
                r.url = url;
                r.pages = pages;
                r
            },
        )
}

fn batch() -> impl Strategy<Value = Vec<Record>> {
    (0usize..8).prop_flat_map(|n| {
        (0..n)
            .map(|i| record(format!("r{i}")))
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn scores_and_factors_stay_in_unit_interval(r in record("p".into())) {
        let result = ValidationEngine::default().validate_at(&r, Utc::now()).unwrap();
        let c = result.certainty;
        for v in [c.value(), c.factors.structural.value(), c.factors.consistency.value(), c.factors.referential.value()] {
            prop_assert!((0.0..=1.0).contains(&v), "{} out of range", v);
        }
    }

    #[test]
    fn batch_preserves_order_and_length(records in batch()) {
        let results = ValidationEngine::default().validate_batch(&records).unwrap();
        prop_assert_eq!(results.len(), records.len());
        for (result, record) in results.iter().zip(&records) {
            prop_assert_eq!(result.record_id(), record.id.as_str());
        }
    }

    #[test]
    fn analysis_is_deterministic(records in batch()) {
        let engine = ValidationEngine::default();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let a = engine.analyze_at(&records, None, now, Uuid::nil()).unwrap();
        let b = engine.analyze_at(&records, None, now, Uuid::nil()).unwrap();
        prop_assert_eq!(a.payload.to_json().unwrap(), b.payload.to_json().unwrap());
    }

    #[test]
    fn summary_counts_partition_the_batch(records in batch()) {
        let analysis = ValidationEngine::default().analyze(&records, None).unwrap();
        let s = &analysis.payload.epistemic_summary;
        prop_assert_eq!(s.validated + s.uncertain + s.invalid, s.total);
        prop_assert_eq!(s.validated, analysis.payload.validated_citations.len());
        prop_assert_eq!(
            analysis.payload.validated_citations.len() + analysis.payload.invalid_citations.len(),
            records.len()
        );
    }

    #[test]
    fn well_formed_doi_never_lowers_the_score(mut r in record("p".into())) {
        let engine = ValidationEngine::default();
        r.doi = None;
        let before = engine.validate_at(&r, Utc::now()).unwrap().score();
        r.doi = Some("10.1000/182".to_string());
        let after = engine.validate_at(&r, Utc::now()).unwrap().score();
        prop_assert!(after >= before, "{} < {}", after, before);
    }

    #[test]
    fn errors_always_rule_out_valid(r in record("p".into())) {
        let result = ValidationEngine::default().validate_at(&r, Utc::now()).unwrap();
        if result.has_errors() {
            prop_assert!(result.state.is_invalid());
        } else {
            prop_assert!(!result.state.is_invalid() || result.score() < 0.6);
        }
        prop_assert!(result.state != ValidationState::Valid || result.score() >= 0.6);
    }
}
