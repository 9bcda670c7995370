pub mod inventory;
pub mod recipe;
pub mod shopping;
pub mod suggest;

use std::str::FromStr;

use freshbite_shared::{Category, StorageLocation};
use strum::VariantArray;

/// Accepts a full label ("Milk & Dairy") or its first word ("milk", "meat")
pub fn parse_category(value: &str) -> Result<Category, String> {
    if let Ok(category) = Category::from_label(value) {
        return Ok(category);
    }

    let wanted = value.trim().to_lowercase();
    Category::VARIANTS
        .iter()
        .copied()
        .find(|category| {
            category
                .as_ref()
                .split_whitespace()
                .next()
                .is_some_and(|word| word.eq_ignore_ascii_case(&wanted))
        })
        .ok_or_else(|| {
            let labels: Vec<&str> = Category::VARIANTS.iter().map(|c| c.as_ref()).collect();
            format!("unknown category '{value}', expected one of: {}", labels.join(", "))
        })
}

pub fn parse_storage(value: &str) -> Result<StorageLocation, String> {
    StorageLocation::from_str(value.trim()).map_err(|_| {
        let labels: Vec<&str> = StorageLocation::VARIANTS
            .iter()
            .map(|s| s.as_ref())
            .collect();
        format!("unknown storage '{value}', expected one of: {}", labels.join(", "))
    })
}
