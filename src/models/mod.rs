//! Data model for the early-warning subsystem
//!
//! Inputs arrive from the admission/vitals store; everything else is derived
//! on each request and never treated as the system of record.

pub mod admission;
pub mod risk;
pub mod vitals;

pub use admission::{AdmittedPatient, DashboardSummary, DashboardView, PatientRiskSnapshot};
pub use risk::{RiskTier, ScoreBreakdown, ScoreComponent, ScoreResult, TrendAssessment, TrendDirection};
pub use vitals::{Consciousness, Vitals, VitalsInput};
