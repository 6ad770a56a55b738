//! Development access token commands.

use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use promohub_auth::JwtEncoder;
use promohub_core::config::AppConfig;
use promohub_core::error::AppError;
use promohub_core::types::UserId;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue an access token signed with the configured secret
    Issue {
        /// User ID (UUID) to put in the subject claim
        #[arg(long)]
        user: Uuid,
        /// Email claim
        #[arg(long)]
        email: Option<String>,
        /// Lifetime in minutes
        #[arg(long, default_value_t = 60)]
        ttl_minutes: i64,
    },
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        TokenCommand::Issue {
            user,
            email,
            ttl_minutes,
        } => {
            if *ttl_minutes <= 0 {
                return Err(AppError::validation("--ttl-minutes must be positive"));
            }

            let issued =
                JwtEncoder::new(&config.auth).issue(UserId(*user), email.as_deref(), *ttl_minutes)?;

            match format {
                OutputFormat::Json => output::print_item(&issued, format),
                OutputFormat::Table => {
                    println!("{}", issued.token);
                    output::print_kv("Expires", &issued.expires_at.to_rfc3339());
                }
            }
        }
    }
    Ok(())
}
