//! Prediction audit log
//!
//! Scoring is pure. Callers that want a durable trace of what the engine said
//! snapshot the result here explicitly.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::VigilError;
use crate::models::{RiskTier, ScoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub id: Uuid,
    pub patient_id: String,
    pub admission_id: String,
    pub total_score: u32,
    pub risk_tier: RiskTier,
    pub has_extreme_component: bool,
    pub recorded_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(
        patient_id: impl Into<String>,
        admission_id: impl Into<String>,
        score: &ScoreResult,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            admission_id: admission_id.into(),
            total_score: score.total_score,
            risk_tier: score.risk_tier,
            has_extreme_component: score.has_extreme_component,
            recorded_at,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PredictionRecorder: Send + Sync {
    fn record(&self, record: PredictionRecord) -> Result<(), VigilError>;

    /// All records for a patient, newest first.
    fn history(&self, patient_id: &str) -> Vec<PredictionRecord>;

    /// Newest-first scores, suitable for trend analysis.
    fn recent_scores(&self, patient_id: &str, limit: usize) -> Vec<u32> {
        self.history(patient_id)
            .into_iter()
            .take(limit)
            .map(|r| r.total_score)
            .collect()
    }
}

/// Records kept per patient before the oldest are dropped.
pub const DEFAULT_PREDICTION_RETENTION: usize = 50;

/// Process-local log keyed by patient id, holding at most `retention`
/// newest records per patient.
#[derive(Debug, Clone)]
pub struct InMemoryPredictionLog {
    entries: Arc<DashMap<String, Vec<PredictionRecord>>>,
    retention: usize,
}

impl Default for InMemoryPredictionLog {
    fn default() -> Self {
        Self::with_retention(DEFAULT_PREDICTION_RETENTION)
    }
}

impl InMemoryPredictionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retention(retention: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            retention: retention.max(1),
        }
    }

    pub fn retention(&self) -> usize {
        self.retention
    }

    pub fn patient_count(&self) -> usize {
        self.entries.len()
    }
}

impl PredictionRecorder for InMemoryPredictionLog {
    #[instrument(skip(self, record), fields(patient_id = %record.patient_id, tier = %record.risk_tier))]
    fn record(&self, record: PredictionRecord) -> Result<(), VigilError> {
        if record.patient_id.trim().is_empty() {
            return Err(VigilError::MissingIdentifier("patientId"));
        }
        if record.admission_id.trim().is_empty() {
            return Err(VigilError::MissingIdentifier("admissionId"));
        }

        let mut records = self.entries.entry(record.patient_id.clone()).or_default();
        // Keep newest first even if records arrive out of order.
        let pos = records
            .iter()
            .position(|existing| existing.recorded_at <= record.recorded_at)
            .unwrap_or(records.len());
        info!(total_score = record.total_score, "prediction recorded");
        records.insert(pos, record);
        records.truncate(self.retention);
        Ok(())
    }

    fn history(&self, patient_id: &str) -> Vec<PredictionRecord> {
        self.entries
            .get(patient_id)
            .map(|records| records.value().clone())
            .unwrap_or_default()
    }
}
