//! # citecheck-core
//!
//! Foundation crate for citecheck.
//! Defines the bibliographic record model, validation result types,
//! configuration presets, errors, and constants.
//! The validation crate and every host integration depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ConfigOverrides, ExplorationFeatures, Strictness, ValidationConfig};
pub use errors::{CitecheckError, CitecheckResult, ConfigError};
pub use models::{Certainty, CertaintyScore, Severity, ValidationIssue, ValidationResult, ValidationState};
pub use record::{Creator, CreatorRole, PartialDate, Record, RecordField, RecordKind};
