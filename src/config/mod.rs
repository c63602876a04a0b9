pub mod settings;

pub use settings::{AppSettings, EventScoring, Settings, TierSettings};
