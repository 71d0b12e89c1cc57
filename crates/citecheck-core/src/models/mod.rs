mod certainty;
mod contradiction_hint;
mod epistemic_summary;
mod handoff_payload;
mod issue;
mod relation;
mod uncertainty_region;
mod validation_result;

pub use certainty::{Certainty, CertaintyFactors, CertaintyScore};
pub use contradiction_hint::{ConflictType, ContradictionHint};
pub use epistemic_summary::{EpistemicGap, EpistemicSummary, GapSeverity, GapType};
pub use handoff_payload::{HandoffPayload, InvalidCitation, ValidatedCitation, ValidationDigest};
pub use issue::{IssueCategory, Severity, ValidationIssue};
pub use relation::RecordRelation;
pub use uncertainty_region::{ExplorationSuggestion, UncertaintyCause, UncertaintyRegion};
pub use validation_result::{ValidationResult, ValidationState};
