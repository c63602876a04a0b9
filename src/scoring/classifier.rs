use crate::models::{ImpactEngineError, Result, ScoreSnapshot, TierBand, TierKind, TierTable};

/// Maps a volunteer's cumulative points to a rank band.
#[derive(Debug, Clone)]
pub struct RankClassifier {
    table: TierTable,
}

impl RankClassifier {
    pub fn new(table: TierTable) -> Result<Self> {
        if table.kind() != TierKind::VolunteerRank {
            return Err(ImpactEngineError::TierTableError {
                table: table.kind().as_str().to_string(),
                message: "rank classifier requires a volunteer_rank table".to_string(),
            });
        }
        Ok(Self { table })
    }

    pub fn classify(&self, snapshot: ScoreSnapshot) -> &TierBand {
        self.table.classify(snapshot.points)
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }
}

/// Maps a community's cumulative points to a tier band.
#[derive(Debug, Clone)]
pub struct CommunityTierClassifier {
    table: TierTable,
}

impl CommunityTierClassifier {
    pub fn new(table: TierTable) -> Result<Self> {
        if table.kind() != TierKind::CommunityTier {
            return Err(ImpactEngineError::TierTableError {
                table: table.kind().as_str().to_string(),
                message: "community classifier requires a community_tier table".to_string(),
            });
        }
        Ok(Self { table })
    }

    pub fn classify(&self, snapshot: ScoreSnapshot) -> &TierBand {
        self.table.classify(snapshot.points)
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }
}
