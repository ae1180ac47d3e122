//! Vital sign normalizer
//!
//! Missing measurements are treated as clinically normal so that partial
//! observations can always be scored.

use crate::models::{Consciousness, Vitals, VitalsInput};

pub const DEFAULT_RESPIRATORY_RATE: i32 = 16;
pub const DEFAULT_OXYGEN_SATURATION: f64 = 98.0;
pub const DEFAULT_SYSTOLIC_BP: i32 = 120;
pub const DEFAULT_HEART_RATE: i32 = 80;
pub const DEFAULT_TEMPERATURE_CELSIUS: f64 = 37.0;

impl Default for Vitals {
    fn default() -> Self {
        Self {
            respiratory_rate: DEFAULT_RESPIRATORY_RATE,
            oxygen_saturation: DEFAULT_OXYGEN_SATURATION,
            supplemental_oxygen: false,
            blood_pressure_systolic: DEFAULT_SYSTOLIC_BP,
            heart_rate: DEFAULT_HEART_RATE,
            temperature_celsius: DEFAULT_TEMPERATURE_CELSIUS,
            consciousness: Consciousness::Alert,
        }
    }
}

impl From<&VitalsInput> for Vitals {
    fn from(input: &VitalsInput) -> Self {
        normalize(input)
    }
}

/// Fill every unset field with its normal default.
pub fn normalize(input: &VitalsInput) -> Vitals {
    let defaults = Vitals::default();
    Vitals {
        respiratory_rate: input.respiratory_rate.unwrap_or(defaults.respiratory_rate),
        oxygen_saturation: input.oxygen_saturation.unwrap_or(defaults.oxygen_saturation),
        supplemental_oxygen: input.supplemental_oxygen.unwrap_or(defaults.supplemental_oxygen),
        blood_pressure_systolic: input
            .blood_pressure_systolic
            .unwrap_or(defaults.blood_pressure_systolic),
        heart_rate: input.heart_rate.unwrap_or(defaults.heart_rate),
        temperature_celsius: input.temperature_celsius.unwrap_or(defaults.temperature_celsius),
        consciousness: input.consciousness.unwrap_or(defaults.consciousness),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_normal_defaults() {
        let vitals = normalize(&VitalsInput::default());
        assert_eq!(vitals.respiratory_rate, 16);
        assert_eq!(vitals.oxygen_saturation, 98.0);
        assert_eq!(vitals.blood_pressure_systolic, 120);
        assert_eq!(vitals.heart_rate, 80);
        assert_eq!(vitals.temperature_celsius, 37.0);
        assert_eq!(vitals.consciousness, Consciousness::Alert);
        assert!(!vitals.supplemental_oxygen);
    }

    #[test]
    fn supplied_fields_are_kept() {
        let input = VitalsInput {
            heart_rate: Some(132),
            consciousness: Some(Consciousness::Pain),
            supplemental_oxygen: Some(true),
            ..Default::default()
        };
        let vitals = Vitals::from(&input);
        assert_eq!(vitals.heart_rate, 132);
        assert_eq!(vitals.consciousness, Consciousness::Pain);
        assert!(vitals.supplemental_oxygen);
        assert_eq!(vitals.respiratory_rate, DEFAULT_RESPIRATORY_RATE);
    }

    #[test]
    fn partial_json_deserializes_and_normalizes() {
        let input: VitalsInput =
            serde_json::from_str(r#"{"oxygenSaturation": 93.5, "consciousness": "VOICE"}"#).unwrap();
        let vitals = normalize(&input);
        assert_eq!(vitals.oxygen_saturation, 93.5);
        assert_eq!(vitals.consciousness, Consciousness::Voice);
        assert_eq!(vitals.heart_rate, DEFAULT_HEART_RATE);
    }
}
