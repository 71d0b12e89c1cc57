//! Consistency pass: date shape and plausibility, URL, and page ranges.

use citecheck_core::constants::{PLAUSIBLE_YEAR_MAX, PLAUSIBLE_YEAR_MIN};
use citecheck_core::models::{IssueCategory, ValidationIssue};
use citecheck_core::record::{PartialDate, Record, RecordField};

use super::patterns;

pub fn check(record: &Record) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(raw) = record.text(RecordField::Date) {
        match PartialDate::parse(raw) {
            None => issues.push(ValidationIssue::error(
                RecordField::Date,
                IssueCategory::Malformed,
                format!("date \"{raw}\" is not a valid YYYY, YYYY-MM, or YYYY-MM-DD date"),
            )),
            // Plausible-but-odd data: worth a second look, not a rejection.
            Some(date) if !date.is_plausible() => issues.push(
                ValidationIssue::warning(
                    RecordField::Date,
                    IssueCategory::Implausible,
                    format!(
                        "year {} is outside the expected range {PLAUSIBLE_YEAR_MIN} to {PLAUSIBLE_YEAR_MAX}",
                        date.year
                    ),
                )
                .needing_exploration(),
            ),
            Some(_) => {}
        }
    }

    if let Some(url) = record.text(RecordField::Url) {
        if !patterns::is_well_formed_url(url) {
            issues.push(ValidationIssue::error(
                RecordField::Url,
                IssueCategory::Malformed,
                format!("url \"{url}\" is not an absolute http(s) URL"),
            ));
        }
    }

    if let Some(pages) = record.text(RecordField::Pages) {
        if !patterns::is_well_formed_pages(pages) {
            issues.push(ValidationIssue::warning(
                RecordField::Pages,
                IssueCategory::Suspicious,
                format!("pages \"{pages}\" is not a page number or range"),
            ));
        }
    }

    issues
}
