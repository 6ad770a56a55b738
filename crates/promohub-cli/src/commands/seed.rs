//! Seed command.

use crate::output;
use promohub_core::config::AppConfig;
use promohub_core::error::AppError;
use promohub_database::seed;

/// Insert the default influencers that are missing.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let inserted = seed::seed_default_influencers(&pool).await?;

    if inserted == 0 {
        output::print_warning("Default influencers already present; nothing inserted.");
    } else {
        output::print_success(&format!("Inserted {inserted} influencer(s)."));
    }
    Ok(())
}
