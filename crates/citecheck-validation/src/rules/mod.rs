//! Field rule validator.
//!
//! Three passes over one record, run in a fixed order so issue lists are
//! stable across runs:
//! 1. **Structural**: required fields per kind, identifiable creators
//! 2. **Consistency**: date shape and range, URL, page ranges
//! 3. **Referential**: DOI/ISBN/ISSN shape, presence of any persistent identifier
//!
//! Malformed values never fail the call; they become issues.

pub mod consistency;
pub mod patterns;
pub mod referential;
pub mod structural;

use citecheck_core::config::ValidationConfig;
use citecheck_core::models::ValidationIssue;
use citecheck_core::record::Record;

/// Run all three passes and return their issues in pass order.
pub fn validate(record: &Record, config: &ValidationConfig) -> Vec<ValidationIssue> {
    let mut issues = structural::check(record);
    issues.extend(consistency::check(record));
    issues.extend(referential::check(record, config));
    issues
}
