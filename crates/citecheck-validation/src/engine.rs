//! ValidationEngine: implements IValidator, runs the rule passes, scores and
//! classifies each record, then drives the batch-level analysis into a
//! handoff payload.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use citecheck_core::config::ValidationConfig;
use citecheck_core::constants::HANDOFF_TRIGGER_THRESHOLD;
use citecheck_core::errors::{CitecheckError, CitecheckResult};
use citecheck_core::models::{HandoffPayload, RecordRelation, ValidationResult};
use citecheck_core::record::Record;
use citecheck_core::traits::IValidator;
use tracing::{debug, info};
use uuid::Uuid;

use crate::contradiction::ContradictionDetector;
use crate::handoff::HandoffBuilder;
use crate::{batch_span, classify, regions, rules, scoring, summary, validation_span};

/// Everything one batch run produces.
#[derive(Debug, Clone)]
pub struct BatchAnalysis {
    /// One result per input record, in input order.
    pub results: Vec<ValidationResult>,
    pub payload: HandoffPayload,
}

impl BatchAnalysis {
    /// Whether the host should invoke the exploration tool for this run.
    pub fn needs_exploration(&self) -> bool {
        ValidationEngine::needs_exploration(&self.results)
    }
}

/// Stateless validation pipeline bound to one configuration.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    config: ValidationConfig,
}

impl ValidationEngine {
    /// Create an engine. Fails once, up front, on an invalid configuration.
    pub fn new(config: ValidationConfig) -> CitecheckResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one record with an explicit timestamp (injectable for testing).
    pub fn validate_at(&self, record: &Record, now: DateTime<Utc>) -> CitecheckResult<ValidationResult> {
        if record.id.trim().is_empty() {
            return Err(CitecheckError::MissingRecordId { index: 0 });
        }
        Ok(self.run(record, now))
    }

    /// Validate a batch. Output order and length match the input.
    ///
    /// Blank or duplicate ids abort the whole batch; they are caller bugs.
    pub fn validate_batch(&self, records: &[Record]) -> CitecheckResult<Vec<ValidationResult>> {
        self.validate_batch_at(records, Utc::now())
    }

    pub fn validate_batch_at(
        &self,
        records: &[Record],
        now: DateTime<Utc>,
    ) -> CitecheckResult<Vec<ValidationResult>> {
        let _span = batch_span!(records.len()).entered();
        check_batch_ids(records)?;

        let results: Vec<ValidationResult> = records.iter().map(|r| self.run(r, now)).collect();

        info!(
            batch_size = results.len(),
            errors = results.iter().filter(|r| r.has_errors()).count(),
            "batch validated"
        );
        Ok(results)
    }

    /// Full pipeline: validate, detect regions and hints, summarize, and
    /// assemble the handoff payload.
    pub fn analyze(
        &self,
        records: &[Record],
        relations: Option<&[RecordRelation]>,
    ) -> CitecheckResult<BatchAnalysis> {
        self.analyze_at(records, relations, Utc::now(), Uuid::new_v4())
    }

    pub fn analyze_at(
        &self,
        records: &[Record],
        relations: Option<&[RecordRelation]>,
        now: DateTime<Utc>,
        run_id: Uuid,
    ) -> CitecheckResult<BatchAnalysis> {
        let results = self.validate_batch_at(records, now)?;

        let regions = regions::detect(&results, relations, &self.config);
        let hints = ContradictionDetector::from_config(&self.config).detect(&results, relations)?;
        let summary = summary::generate(&results, &regions, &self.config);

        let payload = HandoffBuilder::new(self.config.clone())
            .build_at(&results, regions, hints, summary, now, run_id);

        Ok(BatchAnalysis { results, payload })
    }

    /// The shared trigger convention: explore when any record scores below 0.7.
    pub fn needs_exploration(results: &[ValidationResult]) -> bool {
        results.iter().any(|r| r.score() < HANDOFF_TRIGGER_THRESHOLD)
    }

    fn run(&self, record: &Record, now: DateTime<Utc>) -> ValidationResult {
        let _span = validation_span!(record.id, record.kind).entered();

        let issues = rules::validate(record, &self.config);
        let certainty = scoring::score(record, &issues);
        let state = classify::classify(&issues, &certainty, &self.config);

        debug!(
            state = %state,
            score = certainty.value(),
            issues = issues.len(),
            "record validated"
        );

        ValidationResult {
            record: record.clone(),
            state,
            issues,
            certainty,
            validated_at: now,
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }
}

impl IValidator for ValidationEngine {
    fn validate(&self, record: &Record) -> CitecheckResult<ValidationResult> {
        self.validate_at(record, Utc::now())
    }
}

fn check_batch_ids(records: &[Record]) -> CitecheckResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let id = record.id.trim();
        if id.is_empty() {
            return Err(CitecheckError::MissingRecordId { index });
        }
        if !seen.insert(id) {
            return Err(CitecheckError::DuplicateRecordId { id: id.to_string() });
        }
    }
    Ok(())
}
