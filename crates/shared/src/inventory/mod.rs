use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{Category, StorageLocation};

/// A perishable item logged in the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub quantity: String,
    pub expiry_date: NaiveDate,
    pub storage: StorageLocation,
    pub date_added: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConsumeMethod {
    #[default]
    Manual,
    Recipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumedItem {
    pub id: String,
    pub item_name: String,
    pub consumed_date: DateTime<Utc>,
    pub method: ConsumeMethod,
    pub quantity: String,
}
