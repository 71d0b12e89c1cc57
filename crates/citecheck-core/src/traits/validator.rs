use crate::errors::CitecheckResult;
use crate::models::ValidationResult;
use crate::record::Record;

/// Single-record validation: issues, certainty score, and state.
pub trait IValidator: Send + Sync {
    /// Validate one record. Fails only on caller preconditions, never on record data.
    fn validate(&self, record: &Record) -> CitecheckResult<ValidationResult>;
}
