//! Composite score computation
//!
//! Pure functions over already-normalized vitals. The engine never rejects a
//! value: anything outside the usual physiological range simply lands in the
//! extreme band of its table.

use tracing::debug;

use super::classifier;
use super::normalize::normalize;
use super::thresholds::{BreakpointTable, ScoringTables, MAX_BAND_POINTS};
use crate::models::{ScoreBreakdown, ScoreComponent, ScoreResult, Vitals, VitalsInput};

#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    tables: ScoringTables,
}

impl ScoreEngine {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    /// Score a normalized vitals record, without classifying it.
    pub fn score(&self, vitals: &Vitals) -> ScoreBreakdown {
        let t = &self.tables;
        let numeric = [
            measure(
                "Respiratory rate",
                &t.respiratory_rate,
                f64::from(vitals.respiratory_rate),
                format!("{}/min", vitals.respiratory_rate),
            ),
            measure(
                "Oxygen saturation",
                &t.oxygen_saturation,
                vitals.oxygen_saturation,
                format!("{}%", vitals.oxygen_saturation),
            ),
            measure(
                "Systolic blood pressure",
                &t.systolic_blood_pressure,
                f64::from(vitals.blood_pressure_systolic),
                format!("{} mmHg", vitals.blood_pressure_systolic),
            ),
            measure(
                "Heart rate",
                &t.heart_rate,
                f64::from(vitals.heart_rate),
                format!("{} bpm", vitals.heart_rate),
            ),
            measure(
                "Temperature",
                &t.temperature,
                vitals.temperature_celsius,
                format!("{:.1}°C", vitals.temperature_celsius),
            ),
        ];

        let has_extreme_component = numeric.iter().any(|c| c.points_awarded == MAX_BAND_POINTS);

        let mut components: Vec<ScoreComponent> = numeric.into_iter().collect();
        if vitals.supplemental_oxygen {
            components.push(ScoreComponent {
                name: "Supplemental oxygen".to_string(),
                points_awarded: t.supplemental_oxygen_points,
                description: format!("On supplemental oxygen (+{})", t.supplemental_oxygen_points),
            });
        }
        if vitals.consciousness.is_altered() {
            components.push(ScoreComponent {
                name: "Consciousness".to_string(),
                points_awarded: t.altered_consciousness_points,
                description: format!(
                    "{} (+{})",
                    vitals.consciousness.label(),
                    t.altered_consciousness_points
                ),
            });
        }
        components.retain(|c| c.points_awarded > 0);

        let total_score: u32 = components.iter().map(|c| u32::from(c.points_awarded)).sum();
        debug!(total_score, has_extreme_component, components = components.len(), "scored vitals");

        ScoreBreakdown {
            total_score,
            components,
            has_extreme_component,
        }
    }

    /// Normalize, score and classify a raw observation.
    pub fn assess(&self, input: &VitalsInput) -> ScoreResult {
        let breakdown = self.score(&normalize(input));
        let (tier, action) = classifier::classify(breakdown.total_score, breakdown.has_extreme_component);
        ScoreResult::from_breakdown(breakdown, tier, action)
    }
}

fn measure(name: &str, table: &BreakpointTable, value: f64, reading: String) -> ScoreComponent {
    let points = table.points_for(value);
    ScoreComponent {
        name: name.to_string(),
        points_awarded: points,
        description: format!("{} {} (+{})", name, reading, points),
    }
}

/// Score a raw observation against the NEWS2 tables.
pub fn assess_vitals(input: &VitalsInput) -> ScoreResult {
    ScoreEngine::default().assess(input)
}
