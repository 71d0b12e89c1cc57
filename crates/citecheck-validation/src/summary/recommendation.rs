//! Recommendation text by overall certainty band.

use citecheck_core::models::Certainty;

pub const WELL_STRUCTURED_BAND: f64 = 0.8;
pub const NEEDS_IMPROVEMENT_BAND: f64 = 0.5;

pub fn recommend(total: usize, overall_certainty: Certainty) -> String {
    if total == 0 {
        return "No records were supplied; nothing to validate or hand off for exploration."
            .to_string();
    }

    let certainty = overall_certainty.value();
    if certainty >= WELL_STRUCTURED_BAND {
        format!(
            "Collection is well-structured ({:.0}% validated). Hand any remaining ambiguities to the exploration tool.",
            certainty * 100.0
        )
    } else if certainty >= NEEDS_IMPROVEMENT_BAND {
        format!(
            "Collection needs improvement ({:.0}% validated). Fix incomplete records, then use the exploration tool on the uncertain regions.",
            certainty * 100.0
        )
    } else {
        format!(
            "Collection requires significant work ({:.0}% validated). Complete the metadata first; the exploration tool can then investigate what stays ambiguous.",
            certainty * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_inclusive_at_the_lower_edge() {
        assert!(recommend(10, Certainty::new(0.8)).contains("well-structured"));
        assert!(recommend(10, Certainty::new(0.79)).contains("needs improvement"));
        assert!(recommend(10, Certainty::new(0.5)).contains("needs improvement"));
        assert!(recommend(10, Certainty::new(0.49)).contains("requires significant work"));
    }

    #[test]
    fn every_band_names_the_exploration_tool() {
        for c in [0.1, 0.6, 0.9] {
            assert!(recommend(3, Certainty::new(c)).contains("exploration tool"));
        }
    }

    #[test]
    fn empty_batch_has_its_own_text() {
        assert!(recommend(0, Certainty::ZERO).starts_with("No records"));
    }
}
