/// citecheck version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire format version of the handoff payload.
/// Bump on any change that is not purely additive.
pub const HANDOFF_FORMAT_VERSION: &str = "1.0.0";

/// Hosts invoke the exploration tool when any record scores below this.
pub const HANDOFF_TRIGGER_THRESHOLD: f64 = 0.7;

/// Earliest publication year accepted without an exploration flag.
pub const PLAUSIBLE_YEAR_MIN: i32 = 1000;

/// Latest publication year accepted without an exploration flag.
pub const PLAUSIBLE_YEAR_MAX: i32 = 2100;

/// Maximum number of "why" statements attached to one payload entry.
pub const MAX_WHY_STATEMENTS: usize = 5;
