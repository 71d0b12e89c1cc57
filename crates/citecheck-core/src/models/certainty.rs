use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

/// A score, level, or confidence clamped to [0.0, 1.0].
///
/// Every value the core stores goes through [`Certainty::new`], deserialized
/// ones included. NaN clamps to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, TS)]
#[ts(export)]
pub struct Certainty(f64);

impl Certainty {
    pub const ZERO: Certainty = Certainty(0.0);
    pub const ONE: Certainty = Certainty(1.0);

    /// Create a new Certainty, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Certainty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Certainty::new)
    }
}

impl Default for Certainty {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Certainty {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Certainty> for f64 {
    fn from(c: Certainty) -> Self {
        c.0
    }
}

/// The three independently computed factors behind an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CertaintyFactors {
    /// Share of required fields present.
    pub structural: Certainty,
    /// Penalized by error-severity issues.
    pub consistency: Certainty,
    /// Boosted by well-formed persistent identifiers.
    pub referential: Certainty,
}

/// Overall certainty of one record plus the factors it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CertaintyScore {
    pub score: Certainty,
    pub factors: CertaintyFactors,
}

impl CertaintyScore {
    pub fn value(&self) -> f64 {
        self.score.value()
    }
}
