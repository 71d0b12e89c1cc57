//! Partial ISO dates: `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{PLAUSIBLE_YEAR_MAX, PLAUSIBLE_YEAR_MIN};

/// A date with optional month and day precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartialDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PartialDate {
    /// Parse one of the three accepted shapes. Returns `None` when the text
    /// does not match a shape or names a day that does not exist.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.trim().split('-');

        let year = digits(parts.next()?, 4)? as i32;
        let month = match parts.next() {
            Some(m) => Some(digits(m, 2)?),
            None => None,
        };
        let day = match parts.next() {
            Some(d) => Some(digits(d, 2)?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }

        match (month, day) {
            (None, _) => {}
            (Some(m), None) => {
                NaiveDate::from_ymd_opt(year, m, 1)?;
            }
            (Some(m), Some(d)) => {
                NaiveDate::from_ymd_opt(year, m, d)?;
            }
        }

        Some(Self { year, month, day })
    }

    /// Whether the year falls inside the plausible publication range.
    pub fn is_plausible(&self) -> bool {
        (PLAUSIBLE_YEAR_MIN..=PLAUSIBLE_YEAR_MAX).contains(&self.year)
    }
}

impl std::fmt::Display for PartialDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(m) = self.month {
            write!(f, "-{m:02}")?;
        }
        if let Some(d) = self.day {
            write!(f, "-{d:02}")?;
        }
        Ok(())
    }
}

/// Parse exactly `len` ASCII digits.
fn digits(part: &str, len: usize) -> Option<u32> {
    if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
