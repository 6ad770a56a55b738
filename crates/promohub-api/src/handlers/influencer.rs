//! Influencer procedure handlers.
//!
//! Whether these need an identity is decided by the access policy, not by
//! the extractor, so the policy check runs before the body is inspected.

use axum::Json;
use axum::extract::State;

use promohub_auth::Procedure;
use promohub_entity::influencer::Influencer;
use promohub_service::influencer::InfluencerInput;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{MaybeAuthUser, RpcJson};
use crate::state::AppState;

/// GET /api/rpc/influencer.list
pub async fn list(
    State(state): State<AppState>,
    caller: MaybeAuthUser,
) -> Result<Json<ApiResponse<Vec<Influencer>>>, ApiError> {
    state
        .access_policy
        .check(Procedure::InfluencerList, caller.identity())?;
    let influencers = state.influencer_service.list().await?;
    Ok(Json(ApiResponse::ok(influencers)))
}

/// POST /api/rpc/influencer.create
pub async fn create(
    State(state): State<AppState>,
    caller: MaybeAuthUser,
    payload: Result<RpcJson<InfluencerInput>, ApiError>,
) -> Result<Json<ApiResponse<Influencer>>, ApiError> {
    state
        .access_policy
        .check(Procedure::InfluencerCreate, caller.identity())?;
    let RpcJson(input) = payload?;
    let influencer = state.influencer_service.create(input).await?;
    Ok(Json(ApiResponse::ok(influencer)))
}
