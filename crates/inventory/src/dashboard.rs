use chrono::{DateTime, Duration, NaiveDate, Utc};
use freshbite_shared::inventory::{ConsumedItem, FoodItem};
use serde::Serialize;

use crate::expiry::{days_remaining, sort_by_expiry};

const EXPIRING_SOON_LIMIT: usize = 5;

/// Home screen summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_items: usize,
    /// Not yet expired, 0 to 3 days left
    pub expiring_in_3_days: usize,
    /// 4 to 7 days left
    pub expiring_in_7_days: usize,
    /// Consumed within the last 7 x 24 hours
    pub consumed_this_week: usize,
    /// Up to five non-expired items with at most a week left, soonest first
    pub expiring_soon: Vec<FoodItem>,
}

impl Dashboard {
    pub fn build(
        items: &[FoodItem],
        consumed: &[ConsumedItem],
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        let days: Vec<i64> = items
            .iter()
            .map(|item| days_remaining(item.expiry_date, today))
            .collect();

        let week_ago = now - Duration::days(7);
        let consumed_this_week = consumed
            .iter()
            .filter(|c| c.consumed_date >= week_ago)
            .count();

        let mut expiring_soon: Vec<FoodItem> = items
            .iter()
            .filter(|item| {
                let days = days_remaining(item.expiry_date, today);
                (0..=7).contains(&days)
            })
            .cloned()
            .collect();
        sort_by_expiry(&mut expiring_soon, today);
        expiring_soon.truncate(EXPIRING_SOON_LIMIT);

        Self {
            total_items: items.len(),
            expiring_in_3_days: days.iter().filter(|d| (0..=3).contains(*d)).count(),
            expiring_in_7_days: days.iter().filter(|d| (4..=7).contains(*d)).count(),
            consumed_this_week,
            expiring_soon,
        }
    }
}
