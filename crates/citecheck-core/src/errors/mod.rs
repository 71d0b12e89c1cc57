mod config_error;

pub use config_error::ConfigError;

/// Caller-side precondition failures.
///
/// Malformed record *data* never surfaces here; it becomes a
/// `ValidationIssue`. These variants mean the caller broke a contract and
/// are reported once, never retried.
#[derive(Debug, thiserror::Error)]
pub enum CitecheckError {
    #[error("record at index {index} has no identifier")]
    MissingRecordId { index: usize },

    #[error("record id {id} appears more than once in the batch")]
    DuplicateRecordId { id: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("title group \"{title}\" holds {size} records, above the cap of {cap}")]
    ContradictionGroupTooLarge {
        title: String,
        size: usize,
        cap: usize,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type CitecheckResult<T> = Result<T, CitecheckError>;
