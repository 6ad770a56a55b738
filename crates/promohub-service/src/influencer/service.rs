//! Influencer operations. Influencers are shared by all users.

use std::sync::Arc;

use tracing::info;

use promohub_core::result::AppResult;
use promohub_database::repositories::InfluencerRepository;
use promohub_entity::influencer::Influencer;

use super::input::InfluencerInput;

/// Manages the shared influencer catalogue.
#[derive(Debug, Clone)]
pub struct InfluencerService {
    /// Influencer repository.
    influencer_repo: Arc<InfluencerRepository>,
}

impl InfluencerService {
    /// Creates a new influencer service.
    pub fn new(influencer_repo: Arc<InfluencerRepository>) -> Self {
        Self { influencer_repo }
    }

    /// Lists every influencer, newest first.
    pub async fn list(&self) -> AppResult<Vec<Influencer>> {
        self.influencer_repo.list().await
    }

    /// Creates an influencer.
    pub async fn create(&self, input: InfluencerInput) -> AppResult<Influencer> {
        let data = input.into_create()?;
        let influencer = self.influencer_repo.create(&data).await?;
        info!(influencer_id = %influencer.id, name = %influencer.name, "Influencer created");
        Ok(influencer)
    }
}
