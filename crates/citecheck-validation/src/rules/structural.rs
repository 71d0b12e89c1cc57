//! Structural pass: required fields per record kind and identifiable creators.

use citecheck_core::models::{IssueCategory, ValidationIssue};
use citecheck_core::record::{Record, RecordField};

/// Report every required field that is absent, blank, or (for creators) empty,
/// an empty creators list on any kind, then every creator that has neither a
/// last name nor an institutional name.
pub fn check(record: &Record) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for &field in record.kind.required_fields() {
        if !record.has(field) {
            let message = match field {
                RecordField::Creators => format!("a {} needs at least one creator", record.kind),
                _ => format!("{} is required for a {}", field, record.kind),
            };
            issues.push(ValidationIssue::error(field, IssueCategory::Missing, message));
        }
    }

    // Kinds that require creators already reported the empty list above.
    if record.creators.is_empty() && !record.kind.required_fields().contains(&RecordField::Creators) {
        issues.push(ValidationIssue::error(
            RecordField::Creators,
            IssueCategory::Missing,
            "no creators are credited",
        ));
    }

    for (position, creator) in record.creators.iter().enumerate() {
        if !creator.is_identifiable() {
            issues.push(ValidationIssue::error(
                RecordField::Creators,
                IssueCategory::Missing,
                format!(
                    "creator {} has neither a last name nor an institutional name",
                    position + 1
                ),
            ));
        }
    }

    issues
}

/// Number of required fields the record carries.
pub fn present_required(record: &Record) -> usize {
    record
        .kind
        .required_fields()
        .iter()
        .filter(|f| record.has(**f))
        .count()
}
