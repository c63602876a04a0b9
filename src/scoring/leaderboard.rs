use crate::models::{ImpactEngineError, LeaderboardEntry, PageEntry, Result};
use tracing::warn;

/// Assigns globally meaningful rank numbers to one pre-sorted leaderboard
/// page. Does not sort and does not share ranks on ties: positions are
/// strictly sequential in the order the upstream sort produced.
pub struct LeaderboardRanker;

impl LeaderboardRanker {
    /// `computed_rank = (page - 1) * limit + index_within_page + 1`.
    ///
    /// The entries must already be sorted descending by metric; an ascending
    /// pair is logged as a likely upstream bug but ranks are still assigned
    /// positionally.
    pub fn rank(entries: Vec<PageEntry>, page: u64, limit: u64) -> Result<Vec<LeaderboardEntry>> {
        if page < 1 {
            return Err(ImpactEngineError::InvalidInput(format!(
                "page must be >= 1, got {}",
                page
            )));
        }
        if limit < 1 {
            return Err(ImpactEngineError::InvalidInput(format!(
                "limit must be >= 1, got {}",
                limit
            )));
        }
        if entries.len() as u64 > limit {
            return Err(ImpactEngineError::InvalidInput(format!(
                "page holds {} entries but limit is {}",
                entries.len(),
                limit
            )));
        }

        if let Some(pair) = entries.windows(2).find(|w| w[1].metric_value > w[0].metric_value) {
            warn!(
                "leaderboard page not sorted descending: '{}' ({}) follows '{}' ({})",
                pair[1].id, pair[1].metric_value, pair[0].id, pair[0].metric_value
            );
        }

        let offset = (page - 1) * limit;
        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardEntry {
                id: entry.id,
                metric_value: entry.metric_value,
                computed_rank: offset + i as u64 + 1,
            })
            .collect())
    }
}
