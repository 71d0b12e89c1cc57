//! Span definitions per operation: record validation, batch validation,
//! contradiction detection, and handoff assembly.
//!
//! Each span carries the identifying metadata of its operation via `tracing`.

/// Create a span for validating one record.
#[macro_export]
macro_rules! validation_span {
    ($record_id:expr, $kind:expr) => {
        tracing::debug_span!("citecheck.validation", record_id = %$record_id, kind = %$kind)
    };
}

/// Create a span for validating a batch.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("citecheck.batch", batch_size = $batch_size)
    };
}

/// Create a span for contradiction detection.
#[macro_export]
macro_rules! contradiction_span {
    ($batch_size:expr) => {
        tracing::debug_span!("citecheck.contradiction", batch_size = $batch_size)
    };
}

/// Create a span for assembling a handoff payload.
#[macro_export]
macro_rules! handoff_span {
    ($run_id:expr) => {
        tracing::info_span!("citecheck.handoff", run_id = %$run_id)
    };
}
