use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::record::RecordField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// What kind of problem an issue describes. The state classifier keys off
/// this instead of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// A required value is absent or empty.
    Missing,
    /// A value is present but does not have the expected format.
    Malformed,
    /// Well-formed but outside the plausible range.
    Implausible,
    /// Format looks off but is not disqualifying.
    Suspicious,
    /// Nothing external to check the record against.
    Unverifiable,
}

/// One finding of the field rule validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub field: RecordField,
    pub message: String,
    pub severity: Severity,
    /// Whether the downstream exploration tool should look at this.
    pub requires_exploration: bool,
    pub category: IssueCategory,
}

impl ValidationIssue {
    pub fn new(
        field: RecordField,
        severity: Severity,
        category: IssueCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            severity,
            requires_exploration: false,
            category,
        }
    }

    pub fn error(field: RecordField, category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(field, Severity::Error, category, message)
    }

    pub fn warning(field: RecordField, category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(field, Severity::Warning, category, message)
    }

    pub fn info(field: RecordField, category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(field, Severity::Info, category, message)
    }

    /// Mark the issue for the exploration tool.
    pub fn needing_exploration(mut self) -> Self {
        self.requires_exploration = true;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
