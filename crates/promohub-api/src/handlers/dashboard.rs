//! Dashboard procedure handlers.

use axum::Json;
use axum::extract::State;

use promohub_service::DashboardSummary;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/rpc/dashboard.summary
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let summary = state.dashboard_service.summary(&auth).await?;
    Ok(Json(ApiResponse::ok(summary)))
}
