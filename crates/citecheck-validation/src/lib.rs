//! # citecheck-validation
//!
//! Rule-driven validation of bibliographic records with certainty scoring,
//! batch-level uncertainty analysis, and an exploration handoff payload.
//!
//! ## Per record
//! 1. **Rules**: structural, consistency, and referential passes produce issues
//! 2. **Scoring**: structural, consistency, referential factors → overall score
//! 3. **Classification**: issues + score → VALID / INCOMPLETE / INCONSISTENT / UNCERTAIN
//!
//! ## Per batch
//! - Uncertainty regions grouped by cause
//! - Metadata contradiction hints between duplicate titles
//! - Epistemic summary with gaps and a recommendation
//! - Versioned handoff payload for the exploration tool

pub mod classify;
pub mod contradiction;
pub mod engine;
pub mod handoff;
pub mod regions;
pub mod rules;
pub mod scoring;
pub mod spans;
pub mod summary;

pub use contradiction::ContradictionDetector;
pub use engine::{BatchAnalysis, ValidationEngine};
pub use handoff::HandoffBuilder;
