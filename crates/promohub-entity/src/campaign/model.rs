//! Campaign entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use promohub_core::types::{CampaignId, UserId};

use super::status::CampaignStatus;

/// A marketing campaign owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Campaign {
    /// Generated campaign identifier.
    pub id: CampaignId,
    /// The owning user.
    pub user_id: UserId,
    /// Campaign title (non-empty).
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Budget, fixed-point with two decimal places.
    pub budget: Decimal,
    /// First day of the campaign.
    pub start_date: NaiveDate,
    /// Last day of the campaign.
    pub end_date: NaiveDate,
    /// When the campaign was created.
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Where the campaign stands relative to `today`.
    pub fn status_on(&self, today: NaiveDate) -> CampaignStatus {
        CampaignStatus::on(self.start_date, self.end_date, today)
    }
}

/// Data required to insert a new campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampaign {
    /// The owning user.
    pub user_id: UserId,
    /// The editable fields.
    pub fields: CampaignChanges,
}

/// The user-editable campaign fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignChanges {
    /// Campaign title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Budget.
    pub budget: Decimal,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day.
    pub end_date: NaiveDate,
}
