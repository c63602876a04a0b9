use crate::{
    config::{EventScoring, Settings},
    models::{
        LeaderboardEntry, PageEntry, PointsBreakdown, ProgressState, Result, ScoreSnapshot,
        TierBand, TierStanding, TierTable,
    },
    scoring::{
        breakdown::PointsBreakdownCalculator,
        classifier::{CommunityTierClassifier, RankClassifier},
        leaderboard::LeaderboardRanker,
        progress::ProgressCalculator,
    },
};
use tracing::info;

/// Immutable facade over the classifiers and calculators. Built once at
/// startup from validated configuration; safe to share across concurrent
/// callers because every method is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct ImpactEngine {
    volunteer: RankClassifier,
    community: CommunityTierClassifier,
    breakdown: PointsBreakdownCalculator,
}

impl ImpactEngine {
    pub fn new(settings: &Settings) -> Result<Self> {
        let volunteer = settings.volunteer_table()?;
        let community = settings.community_table()?;
        Self::from_parts(volunteer, community, settings.event_scoring)
    }

    pub fn from_parts(
        volunteer: TierTable,
        community: TierTable,
        scoring: EventScoring,
    ) -> Result<Self> {
        let engine = Self {
            volunteer: RankClassifier::new(volunteer)?,
            community: CommunityTierClassifier::new(community)?,
            breakdown: PointsBreakdownCalculator::new(scoring)?,
        };
        info!(
            volunteer_bands = engine.volunteer.table().bands().len(),
            community_bands = engine.community.table().bands().len(),
            "impact engine initialized"
        );
        Ok(engine)
    }

    pub fn classify_volunteer(&self, points: u64) -> &TierBand {
        self.volunteer.classify(ScoreSnapshot::new(points))
    }

    pub fn classify_community(&self, points: u64) -> &TierBand {
        self.community.classify(ScoreSnapshot::new(points))
    }

    pub fn volunteer_progress(&self, points: u64) -> ProgressState {
        ProgressCalculator::progress(self.volunteer.table(), points)
    }

    pub fn community_progress(&self, points: u64) -> ProgressState {
        ProgressCalculator::progress(self.community.table(), points)
    }

    /// Band and progress together, the pair display sites always use.
    pub fn volunteer_standing(&self, points: u64) -> TierStanding {
        TierStanding {
            band: self.classify_volunteer(points).clone(),
            progress: self.volunteer_progress(points),
        }
    }

    pub fn community_standing(&self, points: u64) -> TierStanding {
        TierStanding {
            band: self.classify_community(points).clone(),
            progress: self.community_progress(points),
        }
    }

    /// Award decomposition for one event participation under the injected
    /// schedule.
    pub fn event_breakdown(&self, hours: f64) -> Result<PointsBreakdown> {
        self.breakdown.compute(hours)
    }

    pub fn rank_page(
        &self,
        entries: Vec<PageEntry>,
        page: u64,
        limit: u64,
    ) -> Result<Vec<LeaderboardEntry>> {
        LeaderboardRanker::rank(entries, page, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ImpactEngine {
        ImpactEngine::new(&Settings::default()).unwrap()
    }

    #[test]
    fn standing_pairs_band_with_progress() {
        let standing = engine().volunteer_standing(750);
        assert_eq!(standing.band.name, "Contributor");
        assert_eq!(standing.progress.lower_bound, 500);
        assert!((standing.progress.percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn top_band_standing_is_maxed() {
        let standing = engine().community_standing(80_000);
        assert_eq!(standing.band.name, "Diamond");
        assert!(standing.progress.maxed_out);
    }

    #[test]
    fn engine_uses_injected_schedule() {
        let breakdown = engine().event_breakdown(3.0).unwrap();
        assert_eq!(breakdown.total, 80.0);
    }

    #[test]
    fn both_tables_classify_independently() {
        let engine = engine();
        // Same point total, different tables, different answers.
        assert_eq!(engine.classify_volunteer(1500).name, "Leader");
        assert_eq!(engine.classify_community(1500).name, "Silver");
    }
}
