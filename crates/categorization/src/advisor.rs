use freshbite_shared::{Category, StorageLocation};
use serde::Serialize;

use crate::keywords::{BULK_MARKERS, CUPBOARD_EXCEPTIONS, FREEZER_KEYWORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageSuggestion {
    pub storage: StorageLocation,
    pub reason: &'static str,
}

impl StorageSuggestion {
    fn new(storage: StorageLocation, reason: &'static str) -> Self {
        Self { storage, reason }
    }
}

/// Storage Advisor
///
/// Recommends where to keep an item. Keyword overrides on the product name are
/// checked before the per-category defaults, in this order:
/// freezer keywords, room-temperature produce, bulk meat.
pub struct StorageAdvisor;

impl StorageAdvisor {
    pub fn suggest(category: Category, product_name: &str) -> StorageSuggestion {
        let normalized = product_name.to_lowercase();

        if FREEZER_KEYWORDS.iter().any(|k| normalized.contains(k)) {
            return StorageSuggestion::new(StorageLocation::Freezer, "frozen item");
        }

        if CUPBOARD_EXCEPTIONS.iter().any(|k| normalized.contains(k)) {
            return StorageSuggestion::new(
                StorageLocation::Cupboard,
                "best stored at room temperature",
            );
        }

        if category == Category::MeatProtein {
            if BULK_MARKERS.iter().any(|k| normalized.contains(k)) {
                return StorageSuggestion::new(
                    StorageLocation::Freezer,
                    "large quantity, better frozen",
                );
            }
            return StorageSuggestion::new(StorageLocation::Fridge, "perishable protein");
        }

        let storage = category.default_storage();
        let reason = match storage {
            StorageLocation::Fridge => match category {
                Category::MilkDairy => "perishable dairy",
                Category::VegetablesFruits => "fresh produce",
                Category::Beverages => "best served cold",
                _ => "perishable",
            },
            StorageLocation::Freezer => "long-term storage",
            StorageLocation::Pantry => "dry storage item",
            StorageLocation::Cupboard => "shelf-stable snack",
        };

        StorageSuggestion::new(storage, reason)
    }
}
