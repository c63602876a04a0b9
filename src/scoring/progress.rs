use crate::models::{ProgressState, TierTable};

/// Percentage distance travelled between the current band's floor and the
/// next band's floor.
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// Top-band policy: once there is no next band the caller has maxed out,
    /// reported as 100% with `maxed_out` set. Zero-width ranges cannot occur
    /// because [`TierTable`] construction rejects non-increasing floors.
    pub fn progress(table: &TierTable, points: u64) -> ProgressState {
        let (band, next) = table.band_and_next(points);

        match next {
            Some(next) => {
                let span = (next.min_points - band.min_points) as f64;
                let travelled = points.saturating_sub(band.min_points) as f64;
                ProgressState {
                    current_value: points,
                    lower_bound: band.min_points,
                    upper_bound: Some(next.min_points),
                    percentage: (travelled / span * 100.0).clamp(0.0, 100.0),
                    maxed_out: false,
                }
            }
            None => ProgressState {
                current_value: points,
                lower_bound: band.min_points,
                upper_bound: None,
                percentage: 100.0,
                maxed_out: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_band() {
        let table = TierTable::volunteer_default();
        // Contributor spans 500..1000; 750 is halfway.
        let state = ProgressCalculator::progress(&table, 750);
        assert_eq!(state.lower_bound, 500);
        assert_eq!(state.upper_bound, Some(1000));
        assert!((state.percentage - 50.0).abs() < 1e-9);
        assert!(!state.maxed_out);
    }

    #[test]
    fn band_floor_is_zero_percent() {
        let table = TierTable::volunteer_default();
        let state = ProgressCalculator::progress(&table, 500);
        assert_eq!(state.percentage, 0.0);
    }

    #[test]
    fn just_below_next_band_stays_under_hundred() {
        let table = TierTable::volunteer_default();
        let state = ProgressCalculator::progress(&table, 999);
        assert!(state.percentage < 100.0);
    }

    #[test]
    fn top_band_is_maxed_out() {
        let table = TierTable::volunteer_default();
        let state = ProgressCalculator::progress(&table, 12_000);
        assert_eq!(state.upper_bound, None);
        assert_eq!(state.percentage, 100.0);
        assert!(state.maxed_out);
    }

    #[test]
    fn zero_points_in_lowest_band() {
        let table = TierTable::community_default();
        let state = ProgressCalculator::progress(&table, 0);
        assert_eq!(state.lower_bound, 0);
        assert_eq!(state.upper_bound, Some(1000));
        assert_eq!(state.percentage, 0.0);
    }
}
