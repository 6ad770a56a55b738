//! # promohub-api
//!
//! HTTP API layer for PromoHub built on Axum.
//!
//! Every procedure is mounted at `/api/rpc/<procedure>`: queries answer
//! `GET` with query-string input, mutations answer `POST` with a JSON body.
//! Provides the identity middleware, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
