use crate::config::EventScoring;
use crate::models::{ImpactEngineError, PointsBreakdown, Result};

/// Decomposes an event-participation award into base, hour-bonus, and bonus
/// components. The schedule is injected at construction so alternate point
/// schedules can be tested without touching call sites.
#[derive(Debug, Clone)]
pub struct PointsBreakdownCalculator {
    scoring: EventScoring,
}

impl PointsBreakdownCalculator {
    pub fn new(scoring: EventScoring) -> Result<Self> {
        for (label, value) in [
            ("base_points", scoring.base_points),
            ("hourly_multiplier", scoring.hourly_multiplier),
            ("bonus_points", scoring.bonus_points),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ImpactEngineError::ScoringParamsError(format!(
                    "{} must be finite and >= 0, got {}",
                    label, value
                )));
            }
        }
        Ok(Self { scoring })
    }

    /// Award for `hours` contributed under the injected schedule.
    pub fn compute(&self, hours: f64) -> Result<PointsBreakdown> {
        Self::compute_parts(
            self.scoring.base_points,
            hours,
            self.scoring.hourly_multiplier,
            self.scoring.bonus_points,
        )
    }

    /// Raw decomposition. Negative hours are clamped to zero before the
    /// multiplication (a business rule: hours never subtract points), but
    /// non-finite hours and negative schedule values are caller errors.
    pub fn compute_parts(
        base: f64,
        hours: f64,
        hourly_multiplier: f64,
        bonus: f64,
    ) -> Result<PointsBreakdown> {
        if !hours.is_finite() {
            return Err(ImpactEngineError::InvalidInput(format!(
                "hours must be finite, got {}",
                hours
            )));
        }
        for (label, value) in [
            ("base", base),
            ("hourly_multiplier", hourly_multiplier),
            ("bonus", bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ImpactEngineError::InvalidInput(format!(
                    "{} must be finite and >= 0, got {}",
                    label, value
                )));
            }
        }

        let hour_bonus = hours.max(0.0) * hourly_multiplier;
        Ok(PointsBreakdown {
            base,
            hour_bonus,
            bonus,
            total: base + hour_bonus + bonus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_standard_award() {
        let breakdown = PointsBreakdownCalculator::compute_parts(50.0, 3.0, 10.0, 0.0).unwrap();
        assert_eq!(breakdown.base, 50.0);
        assert_eq!(breakdown.hour_bonus, 30.0);
        assert_eq!(breakdown.bonus, 0.0);
        assert_eq!(breakdown.total, 80.0);
    }

    #[test]
    fn total_is_exact_sum() {
        let breakdown = PointsBreakdownCalculator::compute_parts(12.5, 2.0, 7.25, 3.0).unwrap();
        assert_eq!(breakdown.total, breakdown.base + breakdown.hour_bonus + breakdown.bonus);
    }

    #[test]
    fn negative_hours_clamped_to_zero() {
        let breakdown = PointsBreakdownCalculator::compute_parts(50.0, -2.0, 10.0, 0.0).unwrap();
        assert_eq!(breakdown.hour_bonus, 0.0);
        assert_eq!(breakdown.total, 50.0);
    }

    #[test]
    fn non_finite_hours_rejected() {
        assert!(PointsBreakdownCalculator::compute_parts(50.0, f64::NAN, 10.0, 0.0).is_err());
        assert!(PointsBreakdownCalculator::compute_parts(50.0, f64::INFINITY, 10.0, 0.0).is_err());
    }

    #[test]
    fn negative_base_rejected() {
        assert!(PointsBreakdownCalculator::compute_parts(-1.0, 1.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn zero_total_yields_zero_shares() {
        let breakdown = PointsBreakdownCalculator::compute_parts(0.0, 0.0, 0.0, 0.0).unwrap();
        let shares = breakdown.shares();
        assert_eq!(shares.base_pct, 0.0);
        assert_eq!(shares.hour_bonus_pct, 0.0);
        assert_eq!(shares.bonus_pct, 0.0);
    }

    #[test]
    fn shares_sum_to_hundred() {
        let breakdown = PointsBreakdownCalculator::compute_parts(50.0, 3.0, 10.0, 20.0).unwrap();
        let shares = breakdown.shares();
        let sum = shares.base_pct + shares.hour_bonus_pct + shares.bonus_pct;
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((shares.base_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn injected_schedule_drives_compute() {
        let calc = PointsBreakdownCalculator::new(EventScoring {
            base_points: 50.0,
            hourly_multiplier: 10.0,
            bonus_points: 0.0,
        })
        .unwrap();
        let breakdown = calc.compute(3.0).unwrap();
        assert_eq!(breakdown.total, 80.0);
    }

    #[test]
    fn negative_schedule_rejected_at_construction() {
        let result = PointsBreakdownCalculator::new(EventScoring {
            base_points: 50.0,
            hourly_multiplier: -10.0,
            bonus_points: 0.0,
        });
        assert!(result.is_err());
    }
}
