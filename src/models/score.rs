use crate::models::TierBand;
use serde::{Deserialize, Serialize};

/// Cumulative point total for one volunteer or community, taken at the
/// moment of classification. Built fresh by the caller on every call; the
/// engine never caches one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub points: u64,
}

impl ScoreSnapshot {
    pub fn new(points: u64) -> Self {
        Self { points }
    }
}

/// Decomposition of one event-participation award. `total` is always the
/// exact sum of the three components; nothing here is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub base: f64,
    pub hour_bonus: f64,
    pub bonus: f64,
    pub total: f64,
}

/// Percent-of-total shares for display. Derived on demand from a
/// [`PointsBreakdown`], never stored back into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownShares {
    pub base_pct: f64,
    pub hour_bonus_pct: f64,
    pub bonus_pct: f64,
}

impl PointsBreakdown {
    /// An all-zero total yields 0% per component rather than 0/0.
    pub fn shares(&self) -> BreakdownShares {
        if self.total == 0.0 {
            return BreakdownShares {
                base_pct: 0.0,
                hour_bonus_pct: 0.0,
                bonus_pct: 0.0,
            };
        }
        BreakdownShares {
            base_pct: self.base / self.total * 100.0,
            hour_bonus_pct: self.hour_bonus / self.total * 100.0,
            bonus_pct: self.bonus / self.total * 100.0,
        }
    }
}

/// Position within the current band, as a percentage of the distance to the
/// next band's floor. The top band has no upper bound; it reports 100% with
/// `maxed_out` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub current_value: u64,
    pub lower_bound: u64,
    pub upper_bound: Option<u64>,
    pub percentage: f64,
    pub maxed_out: bool,
}

/// Band plus progress, the pair every display site consumes together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStanding {
    pub band: TierBand,
    pub progress: ProgressState,
}

/// One row of a pre-sorted leaderboard page, before rank assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    pub id: String,
    pub metric_value: f64,
}

/// A leaderboard row with its globally meaningful position attached.
/// Transient; rebuilt on every page fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub metric_value: f64,
    pub computed_rank: u64,
}
