//! Shared test helpers for integration tests.
//!
//! Integration tests need PostgreSQL. Point `PROMOHUB_TEST_DATABASE_URL`
//! at a scratch database to run them; without it every test returns early.
//! Tests isolate themselves by acting as freshly generated users, so they
//! never clear shared tables.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use promohub_api::AppState;
use promohub_api::router::build_router;
use promohub_auth::JwtEncoder;
use promohub_core::config::AppConfig;
use promohub_core::types::{CampaignId, UserId};
use promohub_database::repositories::AssignmentRepository;
use promohub_database::{DatabasePool, migration, seed};

/// Environment variable holding the test database URL.
pub const DATABASE_URL_VAR: &str = "PROMOHUB_TEST_DATABASE_URL";

/// Cookie name enabled for the test configuration.
pub const TOKEN_COOKIE: &str = "sb-access-token";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

/// Response captured from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty)
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error` code of an error envelope.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

impl TestApp {
    /// Create a test application, or `None` when no database is configured.
    pub async fn try_new() -> Option<Self> {
        let Ok(url) = std::env::var(DATABASE_URL_VAR) else {
            eprintln!("skipping: {DATABASE_URL_VAR} is not set");
            return None;
        };
        Some(Self::with_config(test_config(&url)).await)
    }

    /// Create a test application from an explicit configuration.
    pub async fn with_config(config: AppConfig) -> Self {
        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.into_pool();

        migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");
        seed::seed_default_influencers(&db_pool)
            .await
            .expect("Failed to seed influencers");

        let router = build_router(AppState::new(config.clone(), db_pool.clone()));

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Issue a valid access token for `user`.
    pub fn token_for(&self, user: UserId) -> String {
        JwtEncoder::new(&self.config.auth)
            .issue(user, Some("tester@example.com"), 10)
            .expect("issue token")
            .token
    }

    /// A fresh user and a token for it.
    pub fn new_user(&self) -> (UserId, String) {
        let user = UserId::new_v4();
        (user, self.token_for(user))
    }

    /// Call a query procedure.
    pub async fn query(&self, procedure: &str, query: &str, token: Option<&str>) -> TestResponse {
        let uri = if query.is_empty() {
            format!("/api/rpc/{procedure}")
        } else {
            format!("/api/rpc/{procedure}?{query}")
        };
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).expect("request"))
            .await
    }

    /// Call a mutation procedure.
    pub async fn mutate(&self, procedure: &str, input: Value, token: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(format!("/api/rpc/{procedure}"))
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(input.to_string())).expect("request"))
            .await
    }

    /// Send a prepared request through the router.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON response body")
        };
        TestResponse { status, body }
    }

    /// Create a campaign and return its ID.
    pub async fn create_campaign(&self, token: &str, title: &str) -> i64 {
        let response = self
            .mutate(
                "campaign.create",
                serde_json::json!({
                    "title": title,
                    "description": "integration test",
                    "budget": "5000.00",
                    "startDate": "2024-01-01",
                    "endDate": "2099-12-31",
                }),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.data()["id"].as_i64().expect("campaign id")
    }

    /// Create an influencer and return its ID.
    pub async fn create_influencer(&self, token: &str, name: &str, followers: i64, rate: &str) -> i64 {
        let response = self
            .mutate(
                "influencer.create",
                serde_json::json!({
                    "name": name,
                    "followerCount": followers,
                    "engagementRate": rate,
                }),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.data()["id"].as_i64().expect("influencer id")
    }

    /// Assign an influencer to a campaign.
    pub async fn assign(&self, token: &str, campaign_id: i64, influencer_id: i64) -> TestResponse {
        self.mutate(
            "campaign.assignInfluencer",
            serde_json::json!({ "campaignId": campaign_id, "influencerId": influencer_id }),
            Some(token),
        )
        .await
    }

    /// Count assignment rows of a campaign directly in storage.
    pub async fn assignment_count(&self, campaign_id: i64) -> usize {
        let campaign_id = CampaignId(i32::try_from(campaign_id).expect("campaign id fits i32"));
        AssignmentRepository::new(self.db_pool.clone())
            .find_for_campaign(campaign_id)
            .await
            .expect("list assignments")
            .len()
    }
}

/// Configuration used by the integration tests.
pub fn test_config(url: &str) -> AppConfig {
    let mut config = AppConfig::with_database_url(url);
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.access_token_cookie = Some(TOKEN_COOKIE.to_string());
    config.database.max_connections = 4;
    config
}

/// Parse a decimal serialized as a JSON string or number.
pub fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().expect("decimal string"),
        other => other.to_string().parse().expect("decimal number"),
    }
}

/// A name no other test run will have used.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
