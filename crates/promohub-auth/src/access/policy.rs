//! Access policy: which procedures may run without an identity.
//!
//! Every procedure goes through [`AccessPolicy::check`]; handlers that need
//! a caller reach it through [`AccessPolicy::require`].

use std::collections::HashSet;

use promohub_core::config::AccessConfig;
use promohub_core::error::AppError;

use super::procedure::Procedure;
use crate::identity::Identity;

/// Decides whether a procedure call may proceed for a (possibly absent)
/// identity.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    /// Procedures callable without an identity.
    public: HashSet<Procedure>,
}

impl AccessPolicy {
    /// Build the policy from configuration.
    pub fn from_config(config: &AccessConfig) -> Self {
        let mut public = HashSet::new();
        if config.public_influencer_list {
            public.insert(Procedure::InfluencerList);
        }
        if config.public_influencer_create {
            public.insert(Procedure::InfluencerCreate);
        }
        Self { public }
    }

    /// Whether `procedure` needs an identity.
    pub fn requires_authentication(&self, procedure: Procedure) -> bool {
        !self.public.contains(&procedure)
    }

    /// Check the call, passing the identity through when allowed.
    pub fn check<'a>(
        &self,
        procedure: Procedure,
        identity: Option<&'a Identity>,
    ) -> Result<Option<&'a Identity>, AppError> {
        if identity.is_none() && self.requires_authentication(procedure) {
            return Err(AppError::unauthenticated(format!(
                "Authentication required for {procedure}"
            )));
        }
        Ok(identity)
    }

    /// Check the call and insist on a caller.
    ///
    /// A procedure the policy lets through anonymously still fails here
    /// when the handler itself acts on behalf of a user.
    pub fn require<'a>(
        &self,
        procedure: Procedure,
        identity: Option<&'a Identity>,
    ) -> Result<&'a Identity, AppError> {
        self.check(procedure, identity)?.ok_or_else(|| {
            AppError::unauthenticated(format!("{procedure} acts on behalf of a user"))
        })
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::from_config(&AccessConfig::default())
    }
}
