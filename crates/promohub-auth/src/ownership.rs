//! Ownership policy for owner-scoped lookups.
//!
//! Repositories filter by owner, so a miss cannot tell "absent" from "owned
//! by someone else". This policy picks the signal the caller sees.

use std::fmt::Display;

use promohub_core::error::AppError;

/// How an owner-scoped row is being accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedAccess {
    /// Reading the row itself or data hanging off it.
    Read,
    /// Updating or deleting the row itself.
    Write,
    /// Writing another entity that hangs off the row.
    CrossEntityWrite,
}

/// Maps owner-scoped misses to errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipPolicy;

impl OwnershipPolicy {
    /// Create the policy.
    pub fn new() -> Self {
        Self
    }

    /// Unwrap an owner-scoped lookup or produce the matching error.
    pub fn resolve<T>(
        &self,
        access: OwnedAccess,
        resource: &str,
        id: impl Display,
        found: Option<T>,
    ) -> Result<T, AppError> {
        found.ok_or_else(|| self.denial(access, resource, id))
    }

    /// The error for a miss under `access`.
    pub fn denial(&self, access: OwnedAccess, resource: &str, id: impl Display) -> AppError {
        match access {
            OwnedAccess::Read | OwnedAccess::Write => {
                AppError::not_found(format!("{resource} {id} not found"))
            }
            OwnedAccess::CrossEntityWrite => {
                AppError::forbidden(format!("{resource} {id} not found or not owned"))
            }
        }
    }
}
