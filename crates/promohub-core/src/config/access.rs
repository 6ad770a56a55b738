//! Procedure access configuration.

use serde::{Deserialize, Serialize};

/// Which shared-resource procedures may be called without an identity.
///
/// Campaign and dashboard procedures always require authentication and
/// are not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Allow `influencer.list` without an identity.
    #[serde(default = "default_public_list")]
    pub public_influencer_list: bool,
    /// Allow `influencer.create` without an identity.
    #[serde(default)]
    pub public_influencer_create: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            public_influencer_list: default_public_list(),
            public_influencer_create: false,
        }
    }
}

fn default_public_list() -> bool {
    true
}
