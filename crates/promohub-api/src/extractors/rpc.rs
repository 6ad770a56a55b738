//! Procedure input extractors.
//!
//! Wrap Axum's `Json` and `Query` so malformed input surfaces as a
//! `VALIDATION_ERROR` in the standard error envelope.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use promohub_core::error::AppError;

use crate::error::ApiError;

/// JSON body input of a mutation.
#[derive(Debug, Clone)]
pub struct RpcJson<T>(pub T);

impl<T, S> FromRequest<S> for RpcJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text()).into()),
        }
    }
}

/// Query-string input of a query procedure.
#[derive(Debug, Clone)]
pub struct RpcQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for RpcQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text()).into()),
        }
    }
}
