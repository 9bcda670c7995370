use serde::{Deserialize, Serialize};

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl RecipeIngredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Quantity and unit as logged, e.g. "200 g"
    pub fn amount(&self) -> String {
        format!("{} {}", self.quantity.trim(), self.unit.trim())
            .trim()
            .to_owned()
    }

    /// Whether an inventory item called `item_name` can stand in for this ingredient
    ///
    /// Case-insensitive containment of the ingredient name in the item name, so
    /// "Amul Paneer" covers "paneer". A blank ingredient matches nothing.
    pub fn matches(&self, item_name: &str) -> bool {
        let wanted = self.name.trim().to_lowercase();
        !wanted.is_empty() && item_name.to_lowercase().contains(&wanted)
    }
}
