//! Request context carrying the authenticated caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use promohub_auth::Identity;
use promohub_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built once per request from the resolved identity and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Email from the identity provider, if any.
    pub email: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for `user_id` stamped with the current time.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            request_time: Utc::now(),
        }
    }

    /// Creates a context from a verified identity.
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            user_id: identity.user_id,
            email: identity.email.clone(),
            request_time: Utc::now(),
        }
    }

    /// The UTC calendar date the request was received on.
    pub fn today(&self) -> NaiveDate {
        self.request_time.date_naive()
    }
}
