use citecheck_core::models::Certainty;
use citecheck_core::record::{PartialDate, Record, RecordKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn certainty_always_in_unit_interval(v in any::<f64>()) {
        let c = Certainty::new(v);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn deserialized_certainty_matches_constructor(v in -10.0f64..10.0) {
        let json = serde_json::to_string(&v).unwrap();
        let c: Certainty = serde_json::from_str(&json).unwrap();
        prop_assert!((c.value() - Certainty::new(v).value()).abs() < 1e-12);
    }

    #[test]
    fn parsed_dates_display_as_their_input(year in 0i32..=9999, month in 1u32..=12, day in 1u32..=28) {
        let input = format!("{year:04}-{month:02}-{day:02}");
        let date = PartialDate::parse(&input).unwrap();
        prop_assert_eq!(date.to_string(), input);
        prop_assert_eq!(date.is_plausible(), (1000..=2100).contains(&year));
    }

    #[test]
    fn normalized_title_is_idempotent(title in "[A-Za-z \\t]{0,30}") {
        let once = Record::new("r", RecordKind::Book, title).normalized_title();
        let twice = Record::new("r", RecordKind::Book, once.clone()).normalized_title();
        prop_assert_eq!(once, twice);
    }
}
