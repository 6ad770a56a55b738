//! Health check handlers.

use axum::Json;
use axum::extract::State;

use promohub_core::error::AppError;
use promohub_database::connection::health_check;

use crate::dto::{ApiResponse, HealthResponse, ReadinessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

/// GET /api/health/ready
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReadinessResponse>>, ApiError> {
    match health_check(&state.db_pool).await {
        Ok(true) => {}
        Ok(false) => return Err(AppError::service_unavailable("Database is unhealthy").into()),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            return Err(AppError::service_unavailable("Database is unreachable").into());
        }
    }

    Ok(Json(ApiResponse::ok(ReadinessResponse {
        status: "ok".to_string(),
        database: "connected".to_string(),
    })))
}
