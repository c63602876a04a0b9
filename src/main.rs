use clap::{Parser, Subcommand};
use impact_engine::{
    format_magnitude, ImpactEngine, PageEntry, Settings, TierKind,
};
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "impact-engine")]
#[clap(about = "Classify, decompose, and rank volunteer impact points", long_about = None)]
struct Cli {
    /// Emit results as JSON instead of text
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a point total into its tier band
    Classify {
        /// Cumulative points
        #[clap(short, long)]
        points: u64,

        /// Classification kind (volunteer, community)
        #[clap(short, long, default_value = "volunteer")]
        kind: String,
    },

    /// Show band plus progress toward the next band
    Progress {
        /// Cumulative points
        #[clap(short, long)]
        points: u64,

        /// Classification kind (volunteer, community)
        #[clap(short, long, default_value = "volunteer")]
        kind: String,
    },

    /// Decompose an event award into base, hour-bonus, and bonus parts
    Breakdown {
        /// Hours contributed at the event
        #[clap(long)]
        hours: f64,
    },

    /// Assign global rank numbers to a sorted leaderboard page
    Rank {
        /// Page entries as JSON, e.g. '[{"id":"a","metric_value":120}]'
        #[clap(short, long)]
        entries: String,

        /// Page number (1-based)
        #[clap(short, long, default_value = "1")]
        page: u64,

        /// Page size
        #[clap(short, long, default_value = "10")]
        limit: u64,
    },

    /// Format a point total as a K/M magnitude string
    Format {
        /// Value to format
        #[clap(short, long)]
        value: u64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    let engine = ImpactEngine::new(&settings)?;

    match cli.command {
        Commands::Classify { points, kind } => {
            let kind = TierKind::from_str(&kind)
                .ok_or_else(|| anyhow::anyhow!("Invalid kind: {}", kind))?;
            let band = match kind {
                TierKind::VolunteerRank => engine.classify_volunteer(points),
                TierKind::CommunityTier => engine.classify_community(points),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(band)?);
            } else {
                println!("{} points ({}): {}", points, kind.as_str(), band.name);
                println!("  color: {}", band.color);
                if let Some(icon) = &band.icon {
                    println!("  icon: {}", icon);
                }
            }
        }

        Commands::Progress { points, kind } => {
            let kind = TierKind::from_str(&kind)
                .ok_or_else(|| anyhow::anyhow!("Invalid kind: {}", kind))?;
            let standing = match kind {
                TierKind::VolunteerRank => engine.volunteer_standing(points),
                TierKind::CommunityTier => engine.community_standing(points),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&standing)?);
            } else {
                println!("{} points: {}", points, standing.band.name);
                match standing.progress.upper_bound {
                    Some(next) => println!(
                        "  {:.1}% of the way from {} to {}",
                        standing.progress.percentage, standing.progress.lower_bound, next
                    ),
                    None => println!("  top band reached"),
                }
            }
        }

        Commands::Breakdown { hours } => {
            let breakdown = engine.event_breakdown(hours)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                let shares = breakdown.shares();
                println!("Award for {} hour(s):", hours);
                println!("  base:       {:.1} ({:.0}%)", breakdown.base, shares.base_pct);
                println!(
                    "  hour bonus: {:.1} ({:.0}%)",
                    breakdown.hour_bonus, shares.hour_bonus_pct
                );
                println!("  bonus:      {:.1} ({:.0}%)", breakdown.bonus, shares.bonus_pct);
                println!("  total:      {:.1}", breakdown.total);
            }
        }

        Commands::Rank { entries, page, limit } => {
            let entries: Vec<PageEntry> = serde_json::from_str(&entries)?;
            let ranked = engine.rank_page(entries, page, limit)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                for entry in &ranked {
                    println!(
                        "#{:<4} {} ({})",
                        entry.computed_rank,
                        entry.id,
                        format_magnitude(entry.metric_value as u64)
                    );
                }
            }
        }

        Commands::Format { value } => {
            println!("{}", format_magnitude(value));
        }
    }

    Ok(())
}
