//! Influencer CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use promohub_core::config::AppConfig;
use promohub_core::error::AppError;
use promohub_database::repositories::InfluencerRepository;
use promohub_entity::influencer::Influencer;

/// Arguments for influencer commands
#[derive(Debug, Args)]
pub struct InfluencerArgs {
    /// Influencer subcommand
    #[command(subcommand)]
    pub command: InfluencerCommand,
}

/// Influencer subcommands
#[derive(Debug, Subcommand)]
pub enum InfluencerCommand {
    /// List all influencers, newest first
    List,
}

/// Influencer display row for table output
#[derive(Debug, Serialize, Tabled)]
struct InfluencerRow {
    /// Influencer ID
    id: i32,
    /// Name
    name: String,
    /// Followers
    followers: i32,
    /// Engagement rate
    engagement: String,
    /// Created at
    created_at: String,
}

impl From<&Influencer> for InfluencerRow {
    fn from(i: &Influencer) -> Self {
        Self {
            id: i.id.into_inner(),
            name: i.name.clone(),
            followers: i.follower_count,
            engagement: format!("{}%", i.engagement_rate),
            created_at: i.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute influencer commands
pub async fn execute(
    args: &InfluencerArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let repo = InfluencerRepository::new(pool);

    match &args.command {
        InfluencerCommand::List => {
            let influencers = repo.list().await?;
            let rows: Vec<InfluencerRow> = influencers.iter().map(InfluencerRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
