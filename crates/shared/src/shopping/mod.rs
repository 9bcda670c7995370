use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::Category;

/// Where a shopping list entry came from
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
pub enum ItemSource {
    /// Added when an inventory item was consumed
    Auto,
    #[default]
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub quantity: String,
    pub is_completed: bool,
    pub source: ItemSource,
}
