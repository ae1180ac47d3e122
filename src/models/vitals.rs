use serde::{Deserialize, Serialize};
use std::fmt;

/// AVPU level of consciousness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Consciousness {
    #[default]
    Alert,
    Voice,
    Pain,
    Unresponsive,
}

impl Consciousness {
    /// Anything other than `Alert` counts as altered, with no further grading.
    pub fn is_altered(self) -> bool {
        !matches!(self, Consciousness::Alert)
    }

    pub fn label(self) -> &'static str {
        match self {
            Consciousness::Alert => "Alert",
            Consciousness::Voice => "Responds to voice",
            Consciousness::Pain => "Responds to pain",
            Consciousness::Unresponsive => "Unresponsive",
        }
    }
}

impl fmt::Display for Consciousness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw observation as recorded at the bedside. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsInput {
    pub respiratory_rate: Option<i32>,
    pub oxygen_saturation: Option<f64>,
    pub supplemental_oxygen: Option<bool>,
    pub blood_pressure_systolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature_celsius: Option<f64>,
    pub consciousness: Option<Consciousness>,
}

/// Fully populated vitals, ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    pub respiratory_rate: i32,
    pub oxygen_saturation: f64,
    pub supplemental_oxygen: bool,
    pub blood_pressure_systolic: i32,
    pub heart_rate: i32,
    pub temperature_celsius: f64,
    pub consciousness: Consciousness,
}
