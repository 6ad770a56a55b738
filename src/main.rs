//! PromoHub server: campaign and influencer management backend.
//!
//! Loads configuration, connects to PostgreSQL, and serves the RPC router
//! until Ctrl-C or SIGTERM.

use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use promohub_api::{AppState, build_app};
use promohub_core::config::{AppConfig, DEVELOPMENT_ENV};
use promohub_core::error::AppError;
use promohub_database::{DatabasePool, migration};

#[tokio::main]
async fn main() {
    let env = std::env::var("PROMOHUB_ENV").unwrap_or_else(|_| DEVELOPMENT_ENV.to_string());

    let loaded = AppConfig::load(&env).and_then(|c| c.ensure_deployable(&env).map(|()| c));
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting PromoHub v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        migration::run_migrations(db.pool()).await?;
    } else {
        tracing::info!("Skipping migrations (database.run_migrations = false)");
    }

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(config, db.pool().clone());
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("PromoHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Closing database pool...");
    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!(grace_seconds = grace.as_secs(), "Database pool did not close in time");
    }

    tracing::info!("PromoHub server shut down gracefully");
    Ok(())
}

/// Wait for Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
