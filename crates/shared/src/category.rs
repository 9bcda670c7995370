use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Food grouping used across the inventory and the shopping list.
///
/// Labels are the user-facing names, e.g. `"Milk & Dairy"`, and are what gets
/// persisted, so stored collections stay readable by hand.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[strum(serialize = "Milk & Dairy")]
    #[serde(rename = "Milk & Dairy")]
    MilkDairy,

    #[strum(serialize = "Vegetables & Fruits")]
    #[serde(rename = "Vegetables & Fruits")]
    VegetablesFruits,

    #[strum(serialize = "Grains & Cereals")]
    #[serde(rename = "Grains & Cereals")]
    GrainsCereals,

    #[strum(serialize = "Meat & Protein")]
    #[serde(rename = "Meat & Protein")]
    MeatProtein,

    Beverages,

    #[strum(serialize = "Condiments & Sauces")]
    #[serde(rename = "Condiments & Sauces")]
    CondimentsSauces,

    Snacks,

    #[default]
    Others,
}

impl Category {
    /// Default storage location for the category, before any keyword override.
    pub fn default_storage(&self) -> StorageLocation {
        match self {
            Category::MilkDairy
            | Category::VegetablesFruits
            | Category::MeatProtein
            | Category::Beverages => StorageLocation::Fridge,
            Category::GrainsCereals | Category::CondimentsSauces | Category::Others => {
                StorageLocation::Pantry
            }
            Category::Snacks => StorageLocation::Cupboard,
        }
    }

    /// Parse a category label, case-insensitively
    pub fn from_label(label: &str) -> crate::Result<Self> {
        label
            .trim()
            .parse::<Self>()
            .map_err(|_| crate::Error::UnknownCategory(label.to_owned()))
    }

    /// Example quantity shown as a hint when logging an item of this category
    pub fn quantity_placeholder(&self) -> &'static str {
        match self {
            Category::MilkDairy => "e.g., 1 liter, 2 bottles",
            Category::VegetablesFruits => "e.g., 500g, 6 pieces",
            Category::GrainsCereals => "e.g., 1kg, 1 packet",
            Category::MeatProtein => "e.g., 250g, 4 pieces",
            Category::Beverages => "e.g., 1 liter, 6 cans",
            Category::CondimentsSauces => "e.g., 200ml, 1 bottle",
            Category::Snacks => "e.g., 150g, 1 pack",
            Category::Others => "e.g., 500g, 2 units",
        }
    }
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum StorageLocation {
    Fridge,
    Freezer,
    #[default]
    Pantry,
    Cupboard,
}

/// How sure the heuristic is about a detected category
#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Low,
}
