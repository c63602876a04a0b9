use crate::models::{TierBand, TierKind, TierTable};
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub tiers: TierSettings,
    pub event_scoring: EventScoring,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

/// Band lists for both classification kinds. These are configuration data,
/// not derived values: every call site must classify against the same
/// tables, so they live here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierSettings {
    pub volunteer: Vec<TierBand>,
    pub community: Vec<TierBand>,
}

/// Per-event award schedule: a flat base, a bonus per hour contributed, and
/// an optional extra bonus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EventScoring {
    pub base_points: f64,
    pub hourly_multiplier: f64,
    pub bonus_points: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Impact Engine".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            tiers: TierSettings {
                volunteer: TierTable::volunteer_default().bands().to_vec(),
                community: TierTable::community_default().bands().to_vec(),
            },
            event_scoring: EventScoring {
                base_points: 50.0,
                hourly_multiplier: 10.0,
                bonus_points: 0.0,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("IMPACT_ENGINE"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn volunteer_table(&self) -> crate::models::Result<TierTable> {
        TierTable::new(TierKind::VolunteerRank, self.tiers.volunteer.clone())
    }

    pub fn community_table(&self) -> crate::models::Result<TierTable> {
        TierTable::new(TierKind::CommunityTier, self.tiers.community.clone())
    }

    /// Startup validation: malformed tier tables or a negative award schedule
    /// are fatal here, never surfaced per-call.
    pub fn validate(&self) -> Result<(), String> {
        self.volunteer_table().map_err(|e| e.to_string())?;
        self.community_table().map_err(|e| e.to_string())?;

        let e = &self.event_scoring;
        for (label, value) in [
            ("base_points", e.base_points),
            ("hourly_multiplier", e.hourly_multiplier),
            ("bonus_points", e.bonus_points),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("event_scoring.{} must be finite and >= 0, got {}", label, value));
            }
        }

        Ok(())
    }
}
