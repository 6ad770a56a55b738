//! Dashboard summary arithmetic.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use promohub_entity::campaign::Campaign;

use crate::campaign::metrics::days_remaining;

/// Upper bound (inclusive) of the "ending soon" window, in days.
pub const ENDING_SOON_DAYS: i64 = 7;

/// Headline numbers for a user's campaigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of campaigns.
    pub total_campaigns: usize,
    /// Campaigns whose end date has not passed.
    pub active_campaigns: usize,
    /// Campaigns with 1 to 7 days remaining.
    pub ending_soon: usize,
    /// Sum of budgets.
    pub total_budget: Decimal,
    /// Mean budget, two decimal places; zero with no campaigns.
    pub average_budget: Decimal,
}

impl DashboardSummary {
    /// Summarize `campaigns` as of `today`.
    pub fn compute(campaigns: &[Campaign], today: NaiveDate) -> Self {
        let total_budget: Decimal = campaigns.iter().map(|c| c.budget).sum();
        let average_budget = if campaigns.is_empty() {
            Decimal::ZERO
        } else {
            (total_budget / Decimal::from(campaigns.len()))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            total_campaigns: campaigns.len(),
            active_campaigns: campaigns
                .iter()
                .filter(|c| c.status_on(today).is_running_or_upcoming())
                .count(),
            ending_soon: campaigns
                .iter()
                .filter(|c| (1..=ENDING_SOON_DAYS).contains(&days_remaining(c.end_date, today)))
                .count(),
            total_budget,
            average_budget,
        }
    }
}
