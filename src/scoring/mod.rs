pub mod breakdown;
pub mod classifier;
pub mod engine;
pub mod leaderboard;
pub mod progress;

pub use breakdown::PointsBreakdownCalculator;
pub use classifier::{CommunityTierClassifier, RankClassifier};
pub use engine::ImpactEngine;
pub use leaderboard::LeaderboardRanker;
pub use progress::ProgressCalculator;
