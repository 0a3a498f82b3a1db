use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Stripe subscription state for one listing, as relayed by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDetails {
    pub status: String,
    /// Unix seconds of the current period end.
    #[serde(default)]
    pub current_period_end: Option<i64>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
}

impl SubscriptionDetails {
    pub fn is_active(&self) -> bool {
        self.status == "active" || self.status == "trialing"
    }

    /// Period end as a human date, when the timestamp is present and valid.
    pub fn period_end_display(&self) -> Option<String> {
        let ts = self.current_period_end?;
        let date = DateTime::from_timestamp(ts, 0)?;
        Some(date.format("%B %-d, %Y").to_string())
    }
}
