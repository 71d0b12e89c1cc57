/// Configuration errors, raised once per configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("low-certainty threshold {low} must be below exploration threshold {exploration}")]
    ThresholdOrder { low: f64, exploration: f64 },

    #[error("title group cap must be at least 2, got {cap}")]
    GroupCapTooSmall { cap: usize },

    #[error("failed to parse configuration: {reason}")]
    Parse { reason: String },
}
