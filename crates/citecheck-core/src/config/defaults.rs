// Single source of truth for all default values.

// --- Strict preset ---
pub const STRICT_REQUIRE_IDENTIFIERS: bool = true;
pub const STRICT_EXPLORATION_THRESHOLD: f64 = 0.8;
pub const STRICT_MIN_VALID_CERTAINTY: f64 = 0.7;

// --- Standard preset ---
pub const STANDARD_REQUIRE_IDENTIFIERS: bool = false;
pub const STANDARD_EXPLORATION_THRESHOLD: f64 = 0.7;
pub const STANDARD_MIN_VALID_CERTAINTY: f64 = 0.6;

// --- Lenient preset ---
pub const LENIENT_REQUIRE_IDENTIFIERS: bool = false;
pub const LENIENT_EXPLORATION_THRESHOLD: f64 = 0.5;
pub const LENIENT_MIN_VALID_CERTAINTY: f64 = 0.4;

// --- Shared across presets ---
pub const DEFAULT_LOW_CERTAINTY_THRESHOLD: f64 = 0.4;
pub const DEFAULT_MAX_TITLE_GROUP_SIZE: usize = 50;

// --- Exploration features ---
pub const DEFAULT_CONTRADICTION_ANALYSIS: bool = true;
pub const DEFAULT_UNCERTAINTY_MAPPING: bool = true;
pub const DEFAULT_GAP_ANALYSIS: bool = true;
pub const DEFAULT_SEMANTIC_COMPARISON: bool = false;
