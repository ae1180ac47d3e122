//! Ward-level aggregation for the monitoring dashboard
//!
//! Each patient is scored independently from already-fetched inputs; the only
//! cross-patient step is the final urgency sort and the summary counts.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::engine::ScoreEngine;
use super::trend::{self, DEFAULT_TREND_WINDOW};
use crate::models::{
    AdmittedPatient, DashboardSummary, DashboardView, PatientRiskSnapshot, RiskTier, VitalsInput,
};

pub const DEFAULT_STALENESS_HOURS: i64 = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Restrict the view to one ward, matched case-insensitively.
    pub ward: Option<String>,
}

impl DashboardQuery {
    fn admits(&self, patient: &AdmittedPatient) -> bool {
        self.ward
            .as_deref()
            .map(str::trim)
            .map_or(true, |ward| ward.eq_ignore_ascii_case(patient.ward_name.trim()))
    }
}

#[derive(Debug, Clone)]
pub struct PopulationAggregator {
    engine: ScoreEngine,
    staleness: Duration,
    trend_window: usize,
}

impl Default for PopulationAggregator {
    fn default() -> Self {
        Self::new(
            ScoreEngine::default(),
            Duration::hours(DEFAULT_STALENESS_HOURS),
            DEFAULT_TREND_WINDOW,
        )
    }
}

impl PopulationAggregator {
    pub fn new(engine: ScoreEngine, staleness: Duration, trend_window: usize) -> Self {
        Self {
            engine,
            staleness,
            trend_window,
        }
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// True when the patient has no recorded vitals, or the last recording
    /// is older than the staleness window at `now`.
    pub fn is_overdue(&self, patient: &AdmittedPatient, now: DateTime<Utc>) -> bool {
        match (&patient.latest_vitals, patient.last_vitals_time) {
            (Some(_), Some(recorded)) => now - recorded > self.staleness,
            _ => true,
        }
    }

    pub fn snapshot(&self, patient: &AdmittedPatient, now: DateTime<Utc>) -> PatientRiskSnapshot {
        // Never-observed patients score as all-normal vitals.
        let score = match &patient.latest_vitals {
            Some(vitals) => self.engine.assess(vitals),
            None => self.engine.assess(&VitalsInput::default()),
        };
        let trend = trend::analyze(&patient.recent_scores, self.trend_window);
        let vitals_overdue = self.is_overdue(patient, now);

        debug!(
            patient_id = %patient.patient_id,
            total_score = score.total_score,
            tier = %score.risk_tier,
            overdue = vitals_overdue,
            "patient snapshot"
        );

        PatientRiskSnapshot {
            admission_id: patient.admission_id.clone(),
            patient_id: patient.patient_id.clone(),
            patient_name: patient.patient_name.clone(),
            ward_name: patient.ward_name.clone(),
            bed_label: patient.bed_label.clone(),
            score,
            trend,
            last_vitals_time: patient.last_vitals_time,
            vitals_overdue,
        }
    }

    #[instrument(skip_all, fields(patients = patients.len(), ward = ?query.ward))]
    pub fn aggregate(
        &self,
        patients: &[AdmittedPatient],
        now: DateTime<Utc>,
        query: &DashboardQuery,
    ) -> DashboardView {
        let mut snapshots: Vec<PatientRiskSnapshot> = patients
            .iter()
            .filter(|p| query.admits(p))
            .map(|p| self.snapshot(p, now))
            .collect();
        sort_by_urgency(&mut snapshots);

        let summary = summarize(&snapshots);
        info!(
            total = summary.total_patients,
            high_risk = summary.high_risk,
            overdue = summary.vitals_overdue,
            worsening = summary.worsening,
            "dashboard aggregated"
        );

        DashboardView {
            summary,
            patients: snapshots,
        }
    }
}

/// Most urgent tier first, then highest score, then name.
pub fn sort_by_urgency(snapshots: &mut [PatientRiskSnapshot]) {
    snapshots.sort_by(|a, b| {
        a.score
            .risk_tier
            .cmp(&b.score.risk_tier)
            .then_with(|| b.score.total_score.cmp(&a.score.total_score))
            .then_with(|| a.patient_name.cmp(&b.patient_name))
    });
}

pub fn summarize(snapshots: &[PatientRiskSnapshot]) -> DashboardSummary {
    let mut summary = DashboardSummary {
        total_patients: snapshots.len(),
        by_tier: RiskTier::ALL.iter().map(|tier| (*tier, 0)).collect(),
        ..Default::default()
    };
    for snapshot in snapshots {
        let tier = snapshot.score.risk_tier;
        if tier.is_high_risk() {
            summary.high_risk += 1;
        }
        if snapshot.vitals_overdue {
            summary.vitals_overdue += 1;
        }
        if snapshot.trend.is_worsening() {
            summary.worsening += 1;
        }
        *summary.by_tier.entry(tier).or_insert(0) += 1;
    }
    summary
}
