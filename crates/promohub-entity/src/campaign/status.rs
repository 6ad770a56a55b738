//! Campaign status relative to a calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle position of a campaign on a given day. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// The start date lies in the future.
    Upcoming,
    /// Today falls within `[start_date, end_date]`.
    Active,
    /// The end date has passed.
    Ended,
}

impl CampaignStatus {
    /// Classify a date range against `today`.
    pub fn on(start_date: NaiveDate, end_date: NaiveDate, today: NaiveDate) -> Self {
        if today > end_date {
            Self::Ended
        } else if today < start_date {
            Self::Upcoming
        } else {
            Self::Active
        }
    }

    /// Whether the campaign has not ended yet.
    pub fn is_running_or_upcoming(&self) -> bool {
        !matches!(self, Self::Ended)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
