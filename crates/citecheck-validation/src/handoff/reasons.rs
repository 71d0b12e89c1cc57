//! Short human-readable "why" statements for payload entries.

use citecheck_core::config::ValidationConfig;
use citecheck_core::constants::MAX_WHY_STATEMENTS;
use citecheck_core::models::{Severity, ValidationResult, ValidationState};
use citecheck_core::record::RecordField;

use crate::rules::patterns;

/// One-line reason for an entry landing in the invalid/uncertain list:
/// the state plus the leading issue, or the threshold it missed.
pub fn reason(result: &ValidationResult, config: &ValidationConfig) -> String {
    if let Some(issue) = result.leading_issue() {
        if issue.severity == Severity::Error || result.state == ValidationState::Uncertain {
            return format!("{}: {}", result.state, issue.message);
        }
    }

    match result.state {
        ValidationState::Valid => format!(
            "{}: certainty {:.2} is below the exploration threshold {:.2}",
            result.state,
            result.score(),
            config.exploration_threshold
        ),
        _ => format!(
            "{}: certainty {:.2} is below the minimum valid certainty {:.2}",
            result.state,
            result.score(),
            config.min_valid_certainty
        ),
    }
}

/// What makes the record uncertain, most severe first.
pub fn uncertainties(result: &ValidationResult) -> Vec<String> {
    let mut statements: Vec<String> = [Severity::Error, Severity::Warning, Severity::Info]
        .into_iter()
        .flat_map(|s| result.issues.iter().filter(move |i| i.severity == s))
        .map(|i| {
            let mut line = format!("{} ({}): {}", i.field, i.severity.as_str(), i.message);
            if i.requires_exploration {
                line.push_str(" [explore]");
            }
            line
        })
        .collect();

    if statements.is_empty() {
        statements.push(format!("overall certainty is {:.2}", result.score()));
    }

    statements.truncate(MAX_WHY_STATEMENTS);
    statements
}

/// Why a validated record can be trusted.
pub fn certainties(result: &ValidationResult) -> Vec<String> {
    let record = &result.record;
    let factors = &result.certainty.factors;
    let mut statements = Vec::new();

    if factors.structural.value() >= 1.0 {
        statements.push(format!(
            "all {} required fields for a {} are present",
            record.kind.required_fields().len(),
            record.kind
        ));
    }
    if !result.has_errors() {
        statements.push("no validation errors".to_string());
    }
    let identifiers: Vec<&str> = [
        (RecordField::Doi, "DOI", patterns::is_well_formed_doi as fn(&str) -> bool),
        (RecordField::Isbn, "ISBN", patterns::is_well_formed_isbn),
        (RecordField::Url, "URL", patterns::is_well_formed_url),
    ]
    .into_iter()
    .filter(|(field, _, well_formed)| record.text(*field).is_some_and(*well_formed))
    .map(|(_, label, _)| label)
    .collect();
    if !identifiers.is_empty() {
        statements.push(format!("well-formed {}", identifiers.join(", ")));
    }
    statements.push(format!("overall certainty is {:.2}", result.score()));

    statements.truncate(MAX_WHY_STATEMENTS);
    statements
}
