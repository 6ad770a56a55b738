//! Route definitions for the PromoHub HTTP API.
//!
//! Procedures are mounted under `/api/rpc/<procedure>`; health probes live
//! under `/api/health`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    handler::Handler,
    middleware as axum_middleware,
    routing::{get, post},
};

use promohub_auth::Procedure;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the identity middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let rpc_routes = Router::new()
        .merge(campaign_routes())
        .merge(influencer_routes())
        .merge(dashboard_routes());

    Router::new()
        .nest("/api/rpc", rpc_routes)
        .merge(health_routes())
        .fallback(handlers::unknown_procedure)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::identity::resolve_identity,
        ))
        .with_state(state)
}

/// Mount one procedure at its wire name.
///
/// Mutations are served over POST and queries over GET. The route carries
/// its `Procedure` so extractors can consult the access policy.
fn procedure<H, T>(router: Router<AppState>, procedure: Procedure, handler: H) -> Router<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    let method = if procedure.is_mutation() {
        post(handler)
    } else {
        get(handler)
    };
    router.route(
        &format!("/{}", procedure.name()),
        method.route_layer(Extension(procedure)),
    )
}

/// Campaign procedures
fn campaign_routes() -> Router<AppState> {
    let router = Router::new();
    let router = procedure(router, Procedure::CampaignList, handlers::campaign::list);
    let router = procedure(router, Procedure::CampaignById, handlers::campaign::by_id);
    let router = procedure(router, Procedure::CampaignCreate, handlers::campaign::create);
    let router = procedure(router, Procedure::CampaignUpdate, handlers::campaign::update);
    let router = procedure(router, Procedure::CampaignDelete, handlers::campaign::delete);
    let router = procedure(
        router,
        Procedure::CampaignAssignInfluencer,
        handlers::campaign::assign_influencer,
    );
    let router = procedure(
        router,
        Procedure::CampaignInfluencers,
        handlers::campaign::influencers,
    );
    procedure(router, Procedure::CampaignMetrics, handlers::campaign::metrics)
}

/// Influencer procedures
fn influencer_routes() -> Router<AppState> {
    let router = Router::new();
    let router = procedure(router, Procedure::InfluencerList, handlers::influencer::list);
    procedure(router, Procedure::InfluencerCreate, handlers::influencer::create)
}

/// Dashboard procedures
fn dashboard_routes() -> Router<AppState> {
    procedure(
        Router::new(),
        Procedure::DashboardSummary,
        handlers::dashboard::summary,
    )
}

/// Liveness and readiness probes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/health/ready", get(handlers::health::ready))
}
