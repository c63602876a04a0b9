use crate::models::{ImpactEngineError, Result};
use serde::{Deserialize, Serialize};

/// Which classification a tier table drives. Volunteer ranks and community
/// tiers use separate tables with different boundaries; keeping the kind on
/// the table stops call sites from mixing them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierKind {
    VolunteerRank,
    CommunityTier,
}

impl TierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierKind::VolunteerRank => "volunteer_rank",
            TierKind::CommunityTier => "community_tier",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "volunteer" | "volunteer_rank" | "rank" => Some(TierKind::VolunteerRank),
            "community" | "community_tier" | "tier" => Some(TierKind::CommunityTier),
            _ => None,
        }
    }
}

/// A named band of cumulative points with its display metadata.
/// `max_points` is `None` for the unbounded top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    pub name: String,
    pub min_points: u64,
    #[serde(default)]
    pub max_points: Option<u64>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TierBand {
    pub fn new(name: &str, min_points: u64, max_points: Option<u64>, color: &str) -> Self {
        Self {
            name: name.to_string(),
            min_points,
            max_points,
            color: color.to_string(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn contains(&self, points: u64) -> bool {
        points >= self.min_points && self.max_points.map_or(true, |max| points <= max)
    }
}

/// An ordered, validated, immutable table of tier bands, contiguous and
/// exhaustive over `[0, +inf)`. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable {
    kind: TierKind,
    bands: Vec<TierBand>,
}

impl TierTable {
    /// Validates and freezes a band list. Bands must be supplied in ascending
    /// `min_points` order, start at 0, be contiguous with no gaps or
    /// overlaps, and end in an unbounded top band.
    pub fn new(kind: TierKind, bands: Vec<TierBand>) -> Result<Self> {
        let fail = |message: String| ImpactEngineError::TierTableError {
            table: kind.as_str().to_string(),
            message,
        };

        let first = bands.first().ok_or_else(|| fail("table is empty".to_string()))?;
        if first.min_points != 0 {
            return Err(fail(format!(
                "lowest band '{}' starts at {}, must start at 0",
                first.name, first.min_points
            )));
        }

        for pair in bands.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.min_points <= lower.min_points {
                return Err(fail(format!(
                    "band '{}' does not start above band '{}'",
                    upper.name, lower.name
                )));
            }
            match lower.max_points {
                Some(max) if max.checked_add(1) == Some(upper.min_points) => {}
                Some(max) => {
                    return Err(fail(format!(
                        "band '{}' ends at {} but band '{}' starts at {}",
                        lower.name, max, upper.name, upper.min_points
                    )));
                }
                None => {
                    return Err(fail(format!(
                        "unbounded band '{}' is not the top band",
                        lower.name
                    )));
                }
            }
        }

        // Last check is outside the windows loop: windows(2) never sees a
        // single-band table's only element as "last".
        if let Some(last) = bands.last() {
            if last.max_points.is_some() {
                return Err(fail(format!("top band '{}' must be unbounded", last.name)));
            }
        }

        Ok(Self { kind, bands })
    }

    /// Scan bands by descending `min_points`; the first band whose floor is
    /// at or below `points` wins, so boundary values land in the higher band.
    /// Total over all inputs because the lowest band starts at 0.
    pub fn classify(&self, points: u64) -> &TierBand {
        self.bands
            .iter()
            .rev()
            .find(|band| points >= band.min_points)
            .unwrap_or(&self.bands[0])
    }

    /// The band containing `points` together with the next band up, if any.
    pub fn band_and_next(&self, points: u64) -> (&TierBand, Option<&TierBand>) {
        let idx = self
            .bands
            .iter()
            .rposition(|band| points >= band.min_points)
            .unwrap_or(0);
        (&self.bands[idx], self.bands.get(idx + 1))
    }

    pub fn kind(&self) -> TierKind {
        self.kind
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }

    /// Canonical volunteer rank boundaries.
    pub fn volunteer_default() -> Self {
        let bands = vec![
            TierBand::new("Beginner", 0, Some(499), "#9CA3AF").with_icon("seedling"),
            TierBand::new("Contributor", 500, Some(999), "#34D399").with_icon("hand-heart"),
            TierBand::new("Leader", 1000, Some(2499), "#60A5FA").with_icon("flag"),
            TierBand::new("Champion", 2500, Some(4999), "#A78BFA").with_icon("medal"),
            TierBand::new("Legend", 5000, None, "#FBBF24").with_icon("crown"),
        ];
        Self::new(TierKind::VolunteerRank, bands).expect("canonical volunteer table is valid")
    }

    /// Canonical community tier boundaries. The surveyed call sites disagreed
    /// on where Bronze starts; this table is the single source of truth (see
    /// DESIGN.md).
    pub fn community_default() -> Self {
        let bands = vec![
            TierBand::new("Bronze", 0, Some(999), "#B45309"),
            TierBand::new("Silver", 1000, Some(4999), "#9CA3AF"),
            TierBand::new("Gold", 5000, Some(14999), "#F59E0B"),
            TierBand::new("Platinum", 15000, Some(49999), "#67E8F9"),
            TierBand::new("Diamond", 50000, None, "#818CF8"),
        ];
        Self::new(TierKind::CommunityTier, bands).expect("canonical community table is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_total_and_consistent() {
        let table = TierTable::volunteer_default();
        for points in [0u64, 1, 499, 500, 999, 1000, 2499, 2500, 4999, 5000, 1_000_000] {
            let band = table.classify(points);
            assert!(band.min_points <= points);
            assert!(band.contains(points));
        }
    }

    #[test]
    fn boundary_belongs_to_higher_band() {
        let table = TierTable::volunteer_default();
        for boundary in [500u64, 1000, 2500, 5000] {
            let below = table.classify(boundary - 1);
            let at = table.classify(boundary);
            assert_ne!(below.name, at.name);
            assert_eq!(at.min_points, boundary);
        }
    }

    #[test]
    fn rejects_table_with_gap() {
        let bands = vec![
            TierBand::new("Low", 0, Some(99), "#000"),
            TierBand::new("High", 200, None, "#fff"),
        ];
        assert!(TierTable::new(TierKind::VolunteerRank, bands).is_err());
    }

    #[test]
    fn rejects_table_with_overlap() {
        let bands = vec![
            TierBand::new("Low", 0, Some(150), "#000"),
            TierBand::new("High", 100, None, "#fff"),
        ];
        assert!(TierTable::new(TierKind::VolunteerRank, bands).is_err());
    }

    #[test]
    fn rejects_table_not_starting_at_zero() {
        let bands = vec![TierBand::new("Bronze", 1000, None, "#000")];
        assert!(TierTable::new(TierKind::CommunityTier, bands).is_err());
    }

    #[test]
    fn rejects_bounded_top_band() {
        let bands = vec![
            TierBand::new("Low", 0, Some(99), "#000"),
            TierBand::new("High", 100, Some(199), "#fff"),
        ];
        assert!(TierTable::new(TierKind::VolunteerRank, bands).is_err());
    }

    #[test]
    fn rejects_empty_table() {
        assert!(TierTable::new(TierKind::VolunteerRank, vec![]).is_err());
    }

    #[test]
    fn community_default_validates() {
        let table = TierTable::community_default();
        assert_eq!(table.bands().len(), 5);
        assert_eq!(table.classify(0).name, "Bronze");
        assert_eq!(table.classify(50_000).name, "Diamond");
    }
}
