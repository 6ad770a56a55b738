//! Campaign procedure handlers.

use axum::Json;
use axum::extract::State;

use promohub_entity::assignment::AssignmentAck;
use promohub_entity::campaign::Campaign;
use promohub_entity::influencer::Influencer;
use promohub_service::campaign::{
    AssignInfluencerInput, CampaignIdInput, CampaignInput, CampaignMetrics, CampaignRefInput,
    UpdateCampaignInput,
};

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, RpcJson, RpcQuery};
use crate::state::AppState;

/// GET /api/rpc/campaign.list
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Campaign>>>, ApiError> {
    let campaigns = state.campaign_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(campaigns)))
}

/// GET /api/rpc/campaign.byId?id=
pub async fn by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    RpcQuery(input): RpcQuery<CampaignIdInput>,
) -> Result<Json<ApiResponse<Campaign>>, ApiError> {
    let campaign = state.campaign_service.get(&auth, input.id).await?;
    Ok(Json(ApiResponse::ok(campaign)))
}

/// POST /api/rpc/campaign.create
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    RpcJson(input): RpcJson<CampaignInput>,
) -> Result<Json<ApiResponse<Campaign>>, ApiError> {
    let campaign = state.campaign_service.create(&auth, input).await?;
    Ok(Json(ApiResponse::ok(campaign)))
}

/// POST /api/rpc/campaign.update
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    RpcJson(input): RpcJson<UpdateCampaignInput>,
) -> Result<Json<ApiResponse<Campaign>>, ApiError> {
    let campaign = state.campaign_service.update(&auth, input).await?;
    Ok(Json(ApiResponse::ok(campaign)))
}

/// POST /api/rpc/campaign.delete
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    RpcJson(input): RpcJson<CampaignIdInput>,
) -> Result<Json<ApiResponse<Campaign>>, ApiError> {
    let campaign = state.campaign_service.delete(&auth, input.id).await?;
    Ok(Json(ApiResponse::ok(campaign)))
}

/// POST /api/rpc/campaign.assignInfluencer
pub async fn assign_influencer(
    State(state): State<AppState>,
    auth: AuthUser,
    RpcJson(input): RpcJson<AssignInfluencerInput>,
) -> Result<Json<ApiResponse<AssignmentAck>>, ApiError> {
    let ack = state.campaign_service.assign_influencer(&auth, input).await?;
    Ok(Json(ApiResponse::ok(ack)))
}

/// GET /api/rpc/campaign.influencers?campaignId=
pub async fn influencers(
    State(state): State<AppState>,
    auth: AuthUser,
    RpcQuery(input): RpcQuery<CampaignRefInput>,
) -> Result<Json<ApiResponse<Vec<Influencer>>>, ApiError> {
    let influencers = state
        .campaign_service
        .influencers(&auth, input.campaign_id)
        .await?;
    Ok(Json(ApiResponse::ok(influencers)))
}

/// GET /api/rpc/campaign.metrics?campaignId=
pub async fn metrics(
    State(state): State<AppState>,
    auth: AuthUser,
    RpcQuery(input): RpcQuery<CampaignRefInput>,
) -> Result<Json<ApiResponse<CampaignMetrics>>, ApiError> {
    let metrics = state
        .campaign_service
        .metrics(&auth, input.campaign_id)
        .await?;
    Ok(Json(ApiResponse::ok(metrics)))
}
