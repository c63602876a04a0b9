pub mod config;
pub mod models;
pub mod scoring;
pub mod utils;

pub use config::{EventScoring, Settings};
pub use models::{
    ImpactEngineError, LeaderboardEntry, PageEntry, PointsBreakdown, ProgressState, Result,
    ScoreSnapshot, TierBand, TierKind, TierStanding, TierTable,
};
pub use scoring::ImpactEngine;
pub use utils::format_magnitude;
