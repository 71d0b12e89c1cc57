//! Referential pass: persistent identifier formats and presence.

use citecheck_core::config::{Strictness, ValidationConfig};
use citecheck_core::models::{IssueCategory, ValidationIssue};
use citecheck_core::record::{Record, RecordField};

use super::patterns;

pub fn check(record: &Record, config: &ValidationConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    // Identifier formats vary in the wild; a bad shape is suspicious, not disqualifying.
    if let Some(doi) = record.text(RecordField::Doi) {
        if !patterns::is_well_formed_doi(doi) {
            issues.push(ValidationIssue::warning(
                RecordField::Doi,
                IssueCategory::Suspicious,
                format!("DOI \"{doi}\" does not look like 10.NNNN/suffix"),
            ));
        }
    }

    if let Some(isbn) = record.text(RecordField::Isbn) {
        if !patterns::is_well_formed_isbn(isbn) {
            issues.push(ValidationIssue::warning(
                RecordField::Isbn,
                IssueCategory::Suspicious,
                format!("ISBN \"{isbn}\" is not 10 or 13 digits"),
            ));
        }
    }

    if let Some(issn) = record.text(RecordField::Issn) {
        if !patterns::is_well_formed_issn(issn) {
            issues.push(ValidationIssue::warning(
                RecordField::Issn,
                IssueCategory::Suspicious,
                format!("ISSN \"{issn}\" does not look like NNNN-NNNN"),
            ));
        }
    }

    if !record.has_persistent_identifier() && !record.kind.is_identifier_exempt() {
        issues.push(missing_identifier_issue(config));
    }

    issues
}

/// Severity of a record with nothing to resolve it against.
///
/// `require_persistent_identifiers` wins; otherwise the strictness level decides.
fn missing_identifier_issue(config: &ValidationConfig) -> ValidationIssue {
    const MESSAGE: &str = "no DOI, ISBN, or URL to verify the record against";
    let field = RecordField::Identifiers;
    let category = IssueCategory::Unverifiable;

    if config.require_persistent_identifiers {
        return ValidationIssue::error(field, category, MESSAGE).needing_exploration();
    }

    match config.strictness {
        Strictness::Strict | Strictness::Standard => {
            ValidationIssue::warning(field, category, MESSAGE)
        }
        Strictness::Lenient => ValidationIssue::info(field, category, MESSAGE),
    }
}
