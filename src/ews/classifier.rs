//! Risk tier lookup
//!
//! A pure mapping from `(total score, extreme component)` to a tier and the
//! clinical response that goes with it.

use crate::models::RiskTier;

pub const ACTION_SINGLE_PARAMETER: &str =
    "Urgent clinical review — single parameter scoring 3; escalate to senior clinician within 30 minutes.";
pub const ACTION_EMERGENCY: &str = "Emergency assessment by critical-care team; continuous monitoring.";
pub const ACTION_HOURLY: &str = "Increase monitoring frequency to hourly; inform responsible nurse.";
pub const ACTION_REASSESS: &str = "Routine monitoring; reassess within 12 hours.";
pub const ACTION_ROUTINE: &str = "Routine monitoring, continue current frequency.";

/// Aggregate score at or above which a patient is critical.
pub const CRITICAL_THRESHOLD: u32 = 7;
/// Aggregate score at or above which a patient is moderate.
pub const MODERATE_THRESHOLD: u32 = 5;

pub fn classify(total_score: u32, has_extreme_component: bool) -> (RiskTier, &'static str) {
    if has_extreme_component {
        return (RiskTier::High, ACTION_SINGLE_PARAMETER);
    }
    match total_score {
        0 => (RiskTier::Low, ACTION_ROUTINE),
        s if s >= CRITICAL_THRESHOLD => (RiskTier::Critical, ACTION_EMERGENCY),
        s if s >= MODERATE_THRESHOLD => (RiskTier::Moderate, ACTION_HOURLY),
        _ => (RiskTier::Low, ACTION_REASSESS),
    }
}
