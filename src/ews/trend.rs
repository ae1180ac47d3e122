//! Score trend over a short recent history
//!
//! Lower scores are healthier, so a score that rises over time is worsening.

use crate::models::{TrendAssessment, TrendDirection};

/// Number of newest-first entries considered, including the newest.
pub const DEFAULT_TREND_WINDOW: usize = 3;

/// Change (in points) that must be exceeded before a direction is reported.
pub const TREND_TOLERANCE: i64 = 1;

/// `history` is newest first.
pub fn analyze(history: &[u32], window: usize) -> TrendAssessment {
    let window = window.max(2).min(history.len());
    if window < 2 {
        return TrendAssessment::default();
    }

    let newest = i64::from(history[0]);
    let reference = i64::from(history[window - 1]);
    let direction = match newest - reference {
        delta if delta > TREND_TOLERANCE => TrendDirection::Worsening,
        delta if delta < -TREND_TOLERANCE => TrendDirection::Improving,
        _ => TrendDirection::Stable,
    };
    TrendAssessment { direction }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn direction(history: &[u32]) -> TrendDirection {
        analyze(history, DEFAULT_TREND_WINDOW).direction
    }

    #[test]
    fn empty_and_single_entry_are_stable() {
        assert_eq!(direction(&[]), TrendDirection::Stable);
        assert_eq!(direction(&[9]), TrendDirection::Stable);
    }

    #[test_case(&[10, 10, 4] => TrendDirection::Worsening ; "score rose from 4 to 10")]
    #[test_case(&[4, 10, 10] => TrendDirection::Improving ; "score fell from 10 to 4")]
    #[test_case(&[5, 3] => TrendDirection::Worsening ; "two points is enough")]
    #[test_case(&[3, 5] => TrendDirection::Improving)]
    #[test_case(&[5, 4, 4] => TrendDirection::Stable ; "one point is within tolerance")]
    #[test_case(&[4, 5, 5] => TrendDirection::Stable)]
    #[test_case(&[6, 6, 6] => TrendDirection::Stable)]
    #[test_case(&[6, 0, 6, 0] => TrendDirection::Stable ; "entries beyond the window are ignored")]
    fn direction_over_default_window(history: &[u32]) -> TrendDirection {
        direction(history)
    }

    #[test]
    fn wider_window_reaches_further_back() {
        let history = [6, 6, 6, 1];
        assert_eq!(analyze(&history, 3).direction, TrendDirection::Stable);
        assert_eq!(analyze(&history, 4).direction, TrendDirection::Worsening);
    }

    #[test]
    fn degenerate_window_still_compares_two_points() {
        assert_eq!(analyze(&[8, 2], 0).direction, TrendDirection::Worsening);
    }
}
