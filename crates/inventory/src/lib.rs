pub mod dashboard;
pub mod expiry;
pub mod inventory;

// Re-export commonly used types
pub use dashboard::Dashboard;
pub use expiry::{
    ExpiryStatus, days_remaining, expiry_status, format_expiry_message, sort_by_expiry,
};
pub use inventory::{
    CONSUMED_KEY, ExpiryFilter, FoodItemUpdate, ITEMS_KEY, IngredientAvailability, Inventory,
    InventoryQuery, NewFoodItem, SortBy,
};
