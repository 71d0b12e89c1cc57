//! Validation configuration: strictness presets plus explicit overrides.
//!
//! # Examples
//!
//! ```
//! use citecheck_core::config::{ConfigOverrides, Strictness, ValidationConfig};
//!
//! let config = ValidationConfig::preset(Strictness::Strict).with_overrides(&ConfigOverrides {
//!     exploration_threshold: Some(0.75),
//!     ..Default::default()
//! });
//! assert!(config.require_persistent_identifiers);
//! assert!((config.exploration_threshold - 0.75).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use super::exploration_features::ExplorationFeatures;
use crate::errors::ConfigError;

/// How hard the validator leans on missing persistent identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Identifiers required; absence is an error that needs exploration.
    Strict,
    /// Absence of identifiers is a warning.
    #[default]
    Standard,
    /// Absence of identifiers is informational.
    Lenient,
}

impl Strictness {
    pub fn as_str(self) -> &'static str {
        match self {
            Strictness::Strict => "strict",
            Strictness::Standard => "standard",
            Strictness::Lenient => "lenient",
        }
    }
}

/// Configuration consumed by every validation component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// The preset this configuration started from.
    pub strictness: Strictness,
    /// Treat a record without DOI, ISBN, or URL as an error. Default: false.
    pub require_persistent_identifiers: bool,
    /// Scores below this are handed to the exploration tool. Default: 0.7.
    pub exploration_threshold: f64,
    /// Minimum score for the VALID state. Default: 0.6.
    pub min_valid_certainty: f64,
    /// Scores below this land in the low-certainty region. Default: 0.4.
    pub low_certainty_threshold: f64,
    /// Largest duplicate-title group the contradiction detector accepts. Default: 50.
    pub max_title_group_size: usize,
    /// Downstream features echoed in the handoff payload.
    pub features: ExplorationFeatures,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::preset(Strictness::Standard)
    }
}

/// Per-field overrides applied on top of a preset.
///
/// `None` keeps the preset value. Also the on-disk TOML shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub strictness: Option<Strictness>,
    pub require_persistent_identifiers: Option<bool>,
    pub exploration_threshold: Option<f64>,
    pub min_valid_certainty: Option<f64>,
    pub low_certainty_threshold: Option<f64>,
    pub max_title_group_size: Option<usize>,
    pub features: Option<ExplorationFeatures>,
}

impl ValidationConfig {
    /// Build the named preset bundle.
    pub fn preset(strictness: Strictness) -> Self {
        let (require_persistent_identifiers, exploration_threshold, min_valid_certainty) =
            match strictness {
                Strictness::Strict => (
                    defaults::STRICT_REQUIRE_IDENTIFIERS,
                    defaults::STRICT_EXPLORATION_THRESHOLD,
                    defaults::STRICT_MIN_VALID_CERTAINTY,
                ),
                Strictness::Standard => (
                    defaults::STANDARD_REQUIRE_IDENTIFIERS,
                    defaults::STANDARD_EXPLORATION_THRESHOLD,
                    defaults::STANDARD_MIN_VALID_CERTAINTY,
                ),
                Strictness::Lenient => (
                    defaults::LENIENT_REQUIRE_IDENTIFIERS,
                    defaults::LENIENT_EXPLORATION_THRESHOLD,
                    defaults::LENIENT_MIN_VALID_CERTAINTY,
                ),
            };

        Self {
            strictness,
            require_persistent_identifiers,
            exploration_threshold,
            min_valid_certainty,
            low_certainty_threshold: defaults::DEFAULT_LOW_CERTAINTY_THRESHOLD,
            max_title_group_size: defaults::DEFAULT_MAX_TITLE_GROUP_SIZE,
            features: ExplorationFeatures::default(),
        }
    }

    /// Apply overrides field by field. A strictness override only relabels
    /// the config; use [`ValidationConfig::preset`] to switch bundles.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(strictness) = overrides.strictness {
            self.strictness = strictness;
        }
        if let Some(v) = overrides.require_persistent_identifiers {
            self.require_persistent_identifiers = v;
        }
        if let Some(v) = overrides.exploration_threshold {
            self.exploration_threshold = v;
        }
        if let Some(v) = overrides.min_valid_certainty {
            self.min_valid_certainty = v;
        }
        if let Some(v) = overrides.low_certainty_threshold {
            self.low_certainty_threshold = v;
        }
        if let Some(v) = overrides.max_title_group_size {
            self.max_title_group_size = v;
        }
        if let Some(v) = overrides.features {
            self.features = v;
        }
        self
    }

    /// Parse a TOML document: the `strictness` key picks the preset, every
    /// other key overrides it. The result is validated before it is returned.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        let config = Self::preset(overrides.strictness.unwrap_or_default()).with_overrides(&overrides);
        config.validate()?;
        Ok(config)
    }

    /// Check caller-supplied values. Thresholds must lie in [0, 1], the
    /// low-certainty threshold must sit below the exploration threshold, and
    /// a title group must be allowed to hold at least a pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("exploration_threshold", self.exploration_threshold),
            ("min_valid_certainty", self.min_valid_certainty),
            ("low_certainty_threshold", self.low_certainty_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.low_certainty_threshold >= self.exploration_threshold {
            return Err(ConfigError::ThresholdOrder {
                low: self.low_certainty_threshold,
                exploration: self.exploration_threshold,
            });
        }

        if self.max_title_group_size < 2 {
            return Err(ConfigError::GroupCapTooSmall {
                cap: self.max_title_group_size,
            });
        }

        Ok(())
    }
}
