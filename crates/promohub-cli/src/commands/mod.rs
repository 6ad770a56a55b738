//! CLI command definitions and dispatch.

pub mod influencer;
pub mod migrate;
pub mod seed;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use promohub_core::config::AppConfig;
use promohub_core::error::AppError;
use promohub_database::DatabasePool;
use promohub_database::connection::mask_password;

/// PromoHub: campaign and influencer management
#[derive(Debug, Parser)]
#[command(name = "promohub", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Configuration environment
    #[arg(short, long, env = "PROMOHUB_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Insert the default influencers
    Seed,
    /// Influencer management
    Influencer(influencer::InfluencerArgs),
    /// Development access tokens
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config_dir, &self.env)?;

        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Seed => seed::execute(&config).await,
            Commands::Influencer(args) => influencer::execute(args, &config, self.format).await,
            Commands::Token(args) => token::execute(args, &config, self.format),
        }
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    tracing::debug!(url = %mask_password(&config.database.url), "Connecting to database");
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
