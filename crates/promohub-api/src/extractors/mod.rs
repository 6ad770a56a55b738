//! Custom Axum extractors.

pub mod auth;
pub mod rpc;

pub use auth::{AuthUser, MaybeAuthUser};
pub use rpc::{RpcJson, RpcQuery};
