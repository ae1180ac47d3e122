//! Breakpoint tables for each scored vital
//!
//! Each table is an ordered list of bands. A value scores the points of the
//! first band whose inclusive upper bound it does not exceed; the last band is
//! open-ended and catches everything above (and anything incomparable).

use serde::{Deserialize, Serialize};

use crate::error::VigilError;

/// Highest sub-score any single band may award.
pub const MAX_BAND_POINTS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Inclusive upper bound. `None` marks the final open band.
    #[serde(default)]
    pub up_to: Option<f64>,
    pub points: u8,
}

impl Band {
    pub fn upto(bound: f64, points: u8) -> Self {
        Self { up_to: Some(bound), points }
    }

    pub fn above(points: u8) -> Self {
        Self { up_to: None, points }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable {
    pub bands: Vec<Band>,
}

impl BreakpointTable {
    pub fn new(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    pub fn points_for(&self, value: f64) -> u8 {
        self.bands
            .iter()
            .find(|band| band.up_to.map_or(true, |bound| value <= bound))
            .or_else(|| self.bands.last())
            .map_or(0, |band| band.points)
    }

    fn validate(&self, vital: &str) -> Result<(), VigilError> {
        let invalid = |reason: String| VigilError::InvalidThresholds {
            vital: vital.to_string(),
            reason,
        };

        let Some(last) = self.bands.last() else {
            return Err(invalid("table has no bands".into()));
        };
        if last.up_to.is_some() {
            return Err(invalid("final band must be open-ended".into()));
        }

        let mut previous: Option<f64> = None;
        for (idx, band) in self.bands.iter().enumerate() {
            if band.points > MAX_BAND_POINTS {
                return Err(invalid(format!(
                    "band {} awards {} points (max {})",
                    idx, band.points, MAX_BAND_POINTS
                )));
            }
            match (band.up_to, idx + 1 == self.bands.len()) {
                (None, false) => return Err(invalid(format!("band {} is open-ended but not last", idx))),
                (Some(bound), _) if !bound.is_finite() => {
                    return Err(invalid(format!("band {} has a non-finite bound", idx)))
                }
                (Some(bound), _) => {
                    if previous.is_some_and(|prev| bound <= prev) {
                        return Err(invalid(format!("band {} bound {} is not ascending", idx, bound)));
                    }
                    previous = Some(bound);
                }
                (None, true) => {}
            }
        }
        Ok(())
    }
}

/// The full set of tables plus the flat additions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTables {
    pub respiratory_rate: BreakpointTable,
    pub oxygen_saturation: BreakpointTable,
    pub systolic_blood_pressure: BreakpointTable,
    pub heart_rate: BreakpointTable,
    pub temperature: BreakpointTable,
    pub supplemental_oxygen_points: u8,
    pub altered_consciousness_points: u8,
}

impl ScoringTables {
    /// NEWS2 thresholds.
    pub fn news2() -> Self {
        Self {
            respiratory_rate: BreakpointTable::new(vec![
                Band::upto(8.0, 3),
                Band::upto(11.0, 1),
                Band::upto(20.0, 0),
                Band::upto(24.0, 2),
                Band::above(3),
            ]),
            oxygen_saturation: BreakpointTable::new(vec![
                Band::upto(91.0, 3),
                Band::upto(93.0, 2),
                Band::upto(95.0, 1),
                Band::above(0),
            ]),
            systolic_blood_pressure: BreakpointTable::new(vec![
                Band::upto(90.0, 3),
                Band::upto(100.0, 2),
                Band::upto(110.0, 1),
                Band::upto(219.0, 0),
                Band::above(3),
            ]),
            heart_rate: BreakpointTable::new(vec![
                Band::upto(40.0, 3),
                Band::upto(50.0, 1),
                Band::upto(90.0, 0),
                Band::upto(110.0, 1),
                Band::upto(130.0, 2),
                Band::above(3),
            ]),
            temperature: BreakpointTable::new(vec![
                Band::upto(35.0, 3),
                Band::upto(36.0, 1),
                Band::upto(38.0, 0),
                Band::upto(39.0, 1),
                Band::above(2),
            ]),
            supplemental_oxygen_points: 2,
            altered_consciousness_points: 3,
        }
    }

    pub fn validate(&self) -> Result<(), VigilError> {
        self.respiratory_rate.validate("respiratory_rate")?;
        self.oxygen_saturation.validate("oxygen_saturation")?;
        self.systolic_blood_pressure.validate("systolic_blood_pressure")?;
        self.heart_rate.validate("heart_rate")?;
        self.temperature.validate("temperature")?;
        for (flag, points) in [
            ("supplemental_oxygen_points", self.supplemental_oxygen_points),
            ("altered_consciousness_points", self.altered_consciousness_points),
        ] {
            if points > MAX_BAND_POINTS {
                return Err(VigilError::InvalidThresholds {
                    vital: flag.to_string(),
                    reason: format!("{} points exceeds max {}", points, MAX_BAND_POINTS),
                });
            }
        }
        Ok(())
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::news2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn news2_tables_are_valid() {
        assert!(ScoringTables::news2().validate().is_ok());
    }

    #[test_case(35.0 => 3 ; "at hypothermia bound")]
    #[test_case(35.1 => 1 ; "just above hypothermia")]
    #[test_case(36.0 => 1)]
    #[test_case(36.1 => 0)]
    #[test_case(38.0 => 0)]
    #[test_case(38.1 => 1)]
    #[test_case(39.0 => 1)]
    #[test_case(39.1 => 2)]
    #[test_case(45.0 => 2 ; "far above range")]
    fn temperature_bands(value: f64) -> u8 {
        ScoringTables::news2().temperature.points_for(value)
    }

    #[test]
    fn nan_lands_in_open_band() {
        let table = ScoringTables::news2().respiratory_rate;
        assert_eq!(table.points_for(f64::NAN), 3);
    }

    #[test]
    fn rejects_descending_bounds() {
        let mut tables = ScoringTables::news2();
        tables.heart_rate = BreakpointTable::new(vec![Band::upto(50.0, 1), Band::upto(40.0, 3), Band::above(0)]);
        let err = tables.validate().unwrap_err();
        assert!(matches!(err, VigilError::InvalidThresholds { ref vital, .. } if vital == "heart_rate"));
    }

    #[test]
    fn rejects_closed_final_band() {
        let mut tables = ScoringTables::news2();
        tables.oxygen_saturation = BreakpointTable::new(vec![Band::upto(91.0, 3), Band::upto(100.0, 0)]);
        assert!(tables.validate().is_err());
    }

    #[test]
    fn rejects_points_above_three() {
        let mut tables = ScoringTables::news2();
        tables.temperature = BreakpointTable::new(vec![Band::upto(35.0, 4), Band::above(0)]);
        assert!(tables.validate().is_err());

        let mut tables = ScoringTables::news2();
        tables.altered_consciousness_points = 5;
        assert!(tables.validate().is_err());
    }

    #[test]
    fn rejects_empty_table() {
        let mut tables = ScoringTables::news2();
        tables.respiratory_rate = BreakpointTable::new(Vec::new());
        assert!(tables.validate().is_err());
    }

    #[test]
    fn tables_deserialize_from_json() {
        let table: BreakpointTable = serde_json::from_str(
            r#"{"bands": [{"up_to": 10, "points": 3}, {"points": 0}]}"#,
        )
        .unwrap();
        assert_eq!(table.points_for(10.0), 3);
        assert_eq!(table.points_for(10.5), 0);
        assert!(table.validate("custom").is_ok());
    }
}
