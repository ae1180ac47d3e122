use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::risk::{RiskTier, ScoreResult, TrendAssessment};
use super::vitals::VitalsInput;

/// A currently-admitted patient as supplied by the admission store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmittedPatient {
    pub admission_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub ward_name: String,
    pub bed_label: String,
    pub latest_vitals: Option<VitalsInput>,
    /// Recent composite scores, newest first.
    #[serde(default)]
    pub recent_scores: Vec<u32>,
    pub last_vitals_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRiskSnapshot {
    pub admission_id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub ward_name: String,
    pub bed_label: String,
    pub score: ScoreResult,
    pub trend: TrendAssessment,
    pub last_vitals_time: Option<DateTime<Utc>>,
    pub vitals_overdue: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub high_risk: usize,
    pub vitals_overdue: usize,
    pub worsening: usize,
    pub by_tier: BTreeMap<RiskTier, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub summary: DashboardSummary,
    pub patients: Vec<PatientRiskSnapshot>,
}
