//! Owner-scoped campaign operations.

use std::sync::Arc;

use tracing::{info, warn};

use promohub_auth::{OwnedAccess, OwnershipPolicy};
use promohub_core::error::AppError;
use promohub_core::result::AppResult;
use promohub_core::types::CampaignId;
use promohub_database::repositories::{
    AssignmentRepository, CampaignRepository, InfluencerRepository,
};
use promohub_database::transaction;
use promohub_entity::assignment::{Assignment, AssignmentAck};
use promohub_entity::campaign::{Campaign, CreateCampaign};
use promohub_entity::influencer::Influencer;

use super::input::{AssignInfluencerInput, CampaignInput, UpdateCampaignInput};
use super::metrics::CampaignMetrics;
use crate::context::RequestContext;

const RESOURCE: &str = "Campaign";

/// Manages campaigns and their influencer assignments.
#[derive(Debug, Clone)]
pub struct CampaignService {
    /// Campaign repository.
    campaign_repo: Arc<CampaignRepository>,
    /// Assignment repository.
    assignment_repo: Arc<AssignmentRepository>,
    /// Ownership policy.
    ownership: OwnershipPolicy,
}

impl CampaignService {
    /// Creates a new campaign service.
    pub fn new(
        campaign_repo: Arc<CampaignRepository>,
        assignment_repo: Arc<AssignmentRepository>,
        ownership: OwnershipPolicy,
    ) -> Self {
        Self {
            campaign_repo,
            assignment_repo,
            ownership,
        }
    }

    /// Lists the caller's campaigns, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Campaign>> {
        self.campaign_repo.list_by_owner(ctx.user_id).await
    }

    /// Gets one of the caller's campaigns.
    pub async fn get(&self, ctx: &RequestContext, id: CampaignId) -> AppResult<Campaign> {
        let found = self.campaign_repo.find_owned(id, ctx.user_id).await?;
        self.ownership.resolve(OwnedAccess::Read, RESOURCE, id, found)
    }

    /// Creates a campaign owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, input: CampaignInput) -> AppResult<Campaign> {
        let fields = input.into_changes()?;
        let campaign = self
            .campaign_repo
            .create(&CreateCampaign {
                user_id: ctx.user_id,
                fields,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            campaign_id = %campaign.id,
            title = %campaign.title,
            "Campaign created"
        );
        Ok(campaign)
    }

    /// Overwrites one of the caller's campaigns.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        input: UpdateCampaignInput,
    ) -> AppResult<Campaign> {
        let id = input.id;
        let changes = input.fields.into_changes()?;
        let updated = self
            .campaign_repo
            .update_owned(id, ctx.user_id, &changes)
            .await?;
        let campaign = self.ownership.resolve(OwnedAccess::Write, RESOURCE, id, updated)?;

        info!(user_id = %ctx.user_id, campaign_id = %id, "Campaign updated");
        Ok(campaign)
    }

    /// Deletes one of the caller's campaigns together with its assignments.
    ///
    /// Runs in one transaction; any failure leaves both tables untouched.
    pub async fn delete(&self, ctx: &RequestContext, id: CampaignId) -> AppResult<Campaign> {
        let mut tx = self.campaign_repo.begin().await?;

        let locked = CampaignRepository::lock_owned(&mut *tx, id, ctx.user_id).await?;
        if locked.is_none() {
            transaction::rollback(tx, "campaign not owned").await;
            return Err(self.ownership.denial(OwnedAccess::Write, RESOURCE, id));
        }

        let removed = AssignmentRepository::delete_for_campaign(&mut *tx, id).await?;
        let deleted = CampaignRepository::delete_owned(&mut *tx, id, ctx.user_id).await?;
        let campaign = self.ownership.resolve(OwnedAccess::Write, RESOURCE, id, deleted)?;

        transaction::commit(tx).await?;

        info!(
            user_id = %ctx.user_id,
            campaign_id = %id,
            assignments_removed = removed,
            "Campaign deleted"
        );
        Ok(campaign)
    }

    /// Assigns an influencer to one of the caller's campaigns.
    ///
    /// Assigning an existing pair succeeds with `created: false`.
    pub async fn assign_influencer(
        &self,
        ctx: &RequestContext,
        input: AssignInfluencerInput,
    ) -> AppResult<AssignmentAck> {
        let mut tx = self.campaign_repo.begin().await?;

        let locked =
            CampaignRepository::lock_owned(&mut *tx, input.campaign_id, ctx.user_id).await?;
        if locked.is_none() {
            warn!(
                user_id = %ctx.user_id,
                campaign_id = %input.campaign_id,
                "Assignment to unowned campaign rejected"
            );
            transaction::rollback(tx, "campaign not owned").await;
            return Err(self.ownership.denial(
                OwnedAccess::CrossEntityWrite,
                RESOURCE,
                input.campaign_id,
            ));
        }

        if !InfluencerRepository::exists(&mut *tx, input.influencer_id).await? {
            transaction::rollback(tx, "influencer missing").await;
            return Err(AppError::not_found(format!(
                "Influencer {} not found",
                input.influencer_id
            )));
        }

        let created = AssignmentRepository::upsert(
            &mut *tx,
            Assignment {
                campaign_id: input.campaign_id,
                influencer_id: input.influencer_id,
            },
        )
        .await?;

        transaction::commit(tx).await?;

        info!(
            user_id = %ctx.user_id,
            campaign_id = %input.campaign_id,
            influencer_id = %input.influencer_id,
            created,
            "Influencer assigned"
        );
        Ok(AssignmentAck::new(created))
    }

    /// Lists the influencers assigned to one of the caller's campaigns.
    pub async fn influencers(
        &self,
        ctx: &RequestContext,
        campaign_id: CampaignId,
    ) -> AppResult<Vec<Influencer>> {
        self.get(ctx, campaign_id).await?;
        self.assignment_repo.find_influencers(campaign_id).await
    }

    /// Computes aggregates for one of the caller's campaigns.
    pub async fn metrics(
        &self,
        ctx: &RequestContext,
        campaign_id: CampaignId,
    ) -> AppResult<CampaignMetrics> {
        let campaign = self.get(ctx, campaign_id).await?;
        let influencers = self.assignment_repo.find_influencers(campaign_id).await?;
        Ok(CampaignMetrics::compute(&campaign, &influencers, ctx.today()))
    }
}
