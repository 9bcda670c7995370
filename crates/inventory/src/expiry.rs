use chrono::NaiveDate;
use freshbite_shared::inventory::FoodItem;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

const CRITICAL_DAYS: i64 = 3;
const WARNING_DAYS: i64 = 7;

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Critical,
    Warning,
    Safe,
}

/// Whole days from `today` until `expiry`; negative once expired
pub fn days_remaining(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

pub fn expiry_status(expiry: NaiveDate, today: NaiveDate) -> ExpiryStatus {
    match days_remaining(expiry, today) {
        days if days <= CRITICAL_DAYS => ExpiryStatus::Critical,
        days if days <= WARNING_DAYS => ExpiryStatus::Warning,
        _ => ExpiryStatus::Safe,
    }
}

pub fn format_expiry_message(days: i64) -> String {
    match days {
        d if d < 0 => "Expired".to_owned(),
        0 => "Expires today".to_owned(),
        1 => "1 day left".to_owned(),
        d => format!("{d} days left"),
    }
}

/// Soonest expiry first; items expiring the same day keep their order
pub fn sort_by_expiry(items: &mut [FoodItem], today: NaiveDate) {
    items.sort_by_key(|item| days_remaining(item.expiry_date, today));
}
