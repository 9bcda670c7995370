pub mod list;

// Re-export commonly used types
pub use list::{AddShoppingItem, SHOPPING_KEY, ShoppingList};
