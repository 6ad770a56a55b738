//! Procedure inputs for campaign operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use promohub_core::error::AppError;
use promohub_core::result::AppResult;
use promohub_core::types::{CampaignId, InfluencerId, calendar_date};
use promohub_entity::campaign::CampaignChanges;

use crate::validation::{validate_budget, validate_input};

/// Editable campaign fields as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    /// Campaign title.
    #[validate(length(min = 1, max = 256, message = "Title must be 1 to 256 characters"))]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Budget, non-negative.
    #[validate(custom(function = "validate_budget"))]
    pub budget: Decimal,
    /// First day.
    #[serde(deserialize_with = "calendar_date")]
    pub start_date: NaiveDate,
    /// Last day.
    #[serde(deserialize_with = "calendar_date")]
    pub end_date: NaiveDate,
}

impl CampaignInput {
    /// Validate every field and the date range, yielding the values to
    /// store.
    pub fn into_changes(self) -> AppResult<CampaignChanges> {
        validate_input(&self)?;
        if self.start_date > self.end_date {
            return Err(AppError::invalid_date_range(format!(
                "Start date {} is after end date {}",
                self.start_date, self.end_date
            )));
        }
        Ok(CampaignChanges {
            title: self.title,
            description: self.description,
            budget: self.budget,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

/// Input of `campaign.update`: the ID plus a full set of fields.
///
/// Every editable column is overwritten, so an omitted `description`
/// clears the stored one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCampaignInput {
    /// Campaign to update.
    pub id: CampaignId,
    /// New field values.
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: CampaignInput,
}

/// Input naming a campaign by `id`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CampaignIdInput {
    /// Campaign ID.
    pub id: CampaignId,
}

/// Input naming a campaign by `campaignId`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRefInput {
    /// Campaign ID.
    pub campaign_id: CampaignId,
}

/// Input of `campaign.assignInfluencer`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignInfluencerInput {
    /// Campaign to assign to.
    pub campaign_id: CampaignId,
    /// Influencer to assign.
    pub influencer_id: InfluencerId,
}
