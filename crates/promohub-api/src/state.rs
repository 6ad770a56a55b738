//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use sqlx::PgPool;

use promohub_auth::{
    AccessPolicy, IdentityProvider, IdentityResolver, JwtIdentityProvider, OwnershipPolicy,
};
use promohub_core::config::AppConfig;
use promohub_database::repositories::{
    AssignmentRepository, CampaignRepository, InfluencerRepository,
};
use promohub_service::{CampaignService, DashboardService, InfluencerService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// When the process started serving
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Resolves the caller from request credentials
    pub identity_resolver: Arc<IdentityResolver>,
    /// Per-procedure authentication requirements
    pub access_policy: Arc<AccessPolicy>,

    // ── Services ─────────────────────────────────────────────
    /// Campaign service
    pub campaign_service: Arc<CampaignService>,
    /// Influencer service
    pub influencer_service: Arc<InfluencerService>,
    /// Dashboard service
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wire repositories, services, and JWT identity resolution.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let provider = Arc::new(JwtIdentityProvider::new(&config.auth));
        Self::with_identity_provider(config, db_pool, provider)
    }

    /// Like [`AppState::new`] with a custom identity provider.
    pub fn with_identity_provider(
        config: AppConfig,
        db_pool: PgPool,
        provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        let campaign_repo = Arc::new(CampaignRepository::new(db_pool.clone()));
        let influencer_repo = Arc::new(InfluencerRepository::new(db_pool.clone()));
        let assignment_repo = Arc::new(AssignmentRepository::new(db_pool.clone()));

        let campaign_service = Arc::new(CampaignService::new(
            Arc::clone(&campaign_repo),
            Arc::clone(&assignment_repo),
            OwnershipPolicy::new(),
        ));
        let influencer_service = Arc::new(InfluencerService::new(Arc::clone(&influencer_repo)));
        let dashboard_service = Arc::new(DashboardService::new(Arc::clone(&campaign_repo)));

        Self {
            access_policy: Arc::new(AccessPolicy::from_config(&config.access)),
            identity_resolver: Arc::new(IdentityResolver::new(provider)),
            config: Arc::new(config),
            started_at: Instant::now(),
            db_pool,
            campaign_service,
            influencer_service,
            dashboard_service,
        }
    }
}
