//! Dashboard procedures.

use std::sync::Arc;

use promohub_core::result::AppResult;
use promohub_database::repositories::CampaignRepository;

use super::summary::DashboardSummary;
use crate::context::RequestContext;

/// Computes dashboard aggregates for the caller.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Campaign repository.
    campaign_repo: Arc<CampaignRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(campaign_repo: Arc<CampaignRepository>) -> Self {
        Self { campaign_repo }
    }

    /// Summarize the caller's campaigns as of the request date.
    pub async fn summary(&self, ctx: &RequestContext) -> AppResult<DashboardSummary> {
        let campaigns = self.campaign_repo.list_by_owner(ctx.user_id).await?;
        Ok(DashboardSummary::compute(&campaigns, ctx.today()))
    }
}
