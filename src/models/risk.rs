use serde::{Deserialize, Serialize};
use std::fmt;

/// Escalation tier. Variant order is the dashboard urgency order, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Critical = 0,
    High = 1,
    Moderate = 2,
    Low = 3,
}

impl RiskTier {
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Critical,
        RiskTier::High,
        RiskTier::Moderate,
        RiskTier::Low,
    ];

    /// Counted in the dashboard's "high risk" figure.
    pub fn is_high_risk(self) -> bool {
        !matches!(self, RiskTier::Low)
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Critical => "CRITICAL",
            RiskTier::High => "HIGH",
            RiskTier::Moderate => "MODERATE",
            RiskTier::Low => "LOW",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One non-zero contribution to the composite score, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponent {
    pub name: String,
    pub points_awarded: u8,
    pub description: String,
}

/// Score engine output before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total_score: u32,
    pub components: Vec<ScoreComponent>,
    pub has_extreme_component: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: u32,
    pub components: Vec<ScoreComponent>,
    pub has_extreme_component: bool,
    pub risk_tier: RiskTier,
    pub recommended_action: String,
}

impl ScoreResult {
    pub fn from_breakdown(breakdown: ScoreBreakdown, risk_tier: RiskTier, recommended_action: &str) -> Self {
        Self {
            total_score: breakdown.total_score,
            components: breakdown.components,
            has_extreme_component: breakdown.has_extreme_component,
            risk_tier,
            recommended_action: recommended_action.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Improving,
    #[default]
    Stable,
    Worsening,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAssessment {
    pub direction: TrendDirection,
}

impl TrendAssessment {
    pub fn is_worsening(&self) -> bool {
        self.direction == TrendDirection::Worsening
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_sort_most_urgent_first() {
        let mut tiers = vec![RiskTier::Low, RiskTier::Critical, RiskTier::Moderate, RiskTier::High];
        tiers.sort();
        assert_eq!(tiers, RiskTier::ALL.to_vec());
    }

    #[test]
    fn only_low_is_not_high_risk() {
        let high: Vec<_> = RiskTier::ALL.iter().filter(|t| t.is_high_risk()).collect();
        assert_eq!(high.len(), 3);
        assert!(!RiskTier::Low.is_high_risk());
    }

    #[test]
    fn tier_serializes_as_screaming_case() {
        assert_eq!(serde_json::to_string(&RiskTier::Moderate).unwrap(), "\"MODERATE\"");
        assert_eq!(
            serde_json::to_string(&TrendDirection::Worsening).unwrap(),
            "\"WORSENING\""
        );
    }
}
