//! Food item inventory
//!
//! Items live as one JSON array under [`ITEMS_KEY`] and the consumption log under
//! [`CONSUMED_KEY`]. Adding an item without a category or storage location fills
//! them in from the smart suggestions; picking a category that differs from the
//! detected one teaches the classifier for next time.

use chrono::{DateTime, Local, NaiveDate, Utc};
use freshbite_categorization::{SmartSuggestions, StorageAdvisor};
use freshbite_shared::inventory::{ConsumeMethod, ConsumedItem, FoodItem};
use freshbite_shared::recipe::RecipeIngredient;
use freshbite_shared::store::{load_json, save_json};
use freshbite_shared::{Category, Error, KeyValueStore, Result, StorageLocation, bail};
use freshbite_shopping::ShoppingList;

use crate::dashboard::Dashboard;
use crate::expiry::{ExpiryStatus, expiry_status, sort_by_expiry};

pub const ITEMS_KEY: &str = "freshbite_items";
pub const CONSUMED_KEY: &str = "freshbite_consumed";

#[derive(Debug, Clone)]
pub struct NewFoodItem {
    pub name: String,
    pub quantity: String,
    pub expiry_date: NaiveDate,
    pub category: Option<Category>,
    pub storage: Option<StorageLocation>,
    pub notes: Option<String>,
}

/// Partial update, `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct FoodItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub category: Option<Category>,
    pub storage: Option<StorageLocation>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryFilter {
    /// Critical or warning, expired items included
    Expiring,
    Fresh,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Expiry,
    /// Newest first
    DateAdded,
    Name,
    Category,
}

/// Whether a recipe ingredient can be taken from the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientAvailability {
    Available,
    /// In stock but critical or warning
    Expiring,
    Missing,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryQuery {
    /// Case-insensitive substring of the item name
    pub search: Option<String>,
    pub category: Option<Category>,
    pub storage: Option<StorageLocation>,
    pub expiry: Option<ExpiryFilter>,
    pub sort_by: SortBy,
}

pub struct Inventory<S> {
    store: S,
}

impl<S: KeyValueStore> Inventory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn items(&self) -> Result<Vec<FoodItem>> {
        load_json(&self.store, ITEMS_KEY)
    }

    pub fn consumed(&self) -> Result<Vec<ConsumedItem>> {
        load_json(&self.store, CONSUMED_KEY)
    }

    pub fn get(&self, id: &str) -> Result<FoodItem> {
        self.items()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(format!("item {id}")))
    }

    pub fn add(&mut self, input: NewFoodItem) -> Result<FoodItem> {
        let name = input.name.trim().to_owned();
        let quantity = input.quantity.trim().to_owned();
        if name.is_empty() || quantity.is_empty() {
            bail!("Please fill in all required fields");
        }

        let mut items = self.items()?;

        let category = match input.category {
            Some(category) => {
                SmartSuggestions::new(&mut self.store)
                    .learn_if_overridden(&name, category)?;
                category
            }
            None => {
                SmartSuggestions::new(&mut self.store)
                    .classify(&name)
                    .category
            }
        };
        let storage = input
            .storage
            .unwrap_or_else(|| StorageAdvisor::suggest(category, &name).storage);

        let item = FoodItem {
            id: ulid::Ulid::new().to_string(),
            name,
            category,
            quantity,
            expiry_date: input.expiry_date,
            storage,
            date_added: Local::now().date_naive(),
            notes: clean_notes(input.notes),
        };

        items.push(item.clone());
        save_json(&mut self.store, ITEMS_KEY, &items)?;

        tracing::info!(
            id = %item.id,
            name = %item.name,
            category = %item.category,
            storage = %item.storage,
            "added item"
        );

        Ok(item)
    }

    pub fn update(&mut self, id: &str, update: FoodItemUpdate) -> Result<FoodItem> {
        let mut items = self.items()?;
        let Some(index) = items.iter().position(|item| item.id == id) else {
            return Err(Error::NotFound(format!("item {id}")));
        };

        let mut item = items[index].clone();
        if let Some(name) = update.name {
            let name = name.trim().to_owned();
            if name.is_empty() {
                bail!("Please fill in all required fields");
            }
            item.name = name;
        }
        if let Some(quantity) = update.quantity {
            let quantity = quantity.trim().to_owned();
            if quantity.is_empty() {
                bail!("Please fill in all required fields");
            }
            item.quantity = quantity;
        }
        if let Some(expiry_date) = update.expiry_date {
            item.expiry_date = expiry_date;
        }
        if let Some(storage) = update.storage {
            item.storage = storage;
        }
        if let Some(notes) = update.notes {
            item.notes = clean_notes(Some(notes));
        }
        if let Some(category) = update.category {
            if category != item.category {
                SmartSuggestions::new(&mut self.store)
                    .learn_if_overridden(&item.name, category)?;
            }
            item.category = category;
        }

        items[index] = item.clone();
        save_json(&mut self.store, ITEMS_KEY, &items)?;

        Ok(item)
    }

    pub fn remove(&mut self, id: &str) -> Result<FoodItem> {
        let mut items = self.items()?;
        let Some(index) = items.iter().position(|item| item.id == id) else {
            return Err(Error::NotFound(format!("item {id}")));
        };

        let removed = items.remove(index);
        save_json(&mut self.store, ITEMS_KEY, &items)?;
        tracing::info!(id = %removed.id, name = %removed.name, "removed item");

        Ok(removed)
    }

    /// Log the item as eaten, remove it and put it back on the shopping list
    pub fn consume(&mut self, id: &str) -> Result<ConsumedItem> {
        let mut log = self.consumed()?;
        let item = self.remove(id)?;

        let consumed = ConsumedItem {
            id: ulid::Ulid::new().to_string(),
            item_name: item.name.clone(),
            consumed_date: Utc::now(),
            method: ConsumeMethod::Manual,
            quantity: item.quantity.clone(),
        };
        log.push(consumed.clone());
        save_json(&mut self.store, CONSUMED_KEY, &log)?;

        ShoppingList::new(&mut self.store)
            .add_auto(&item.name, item.category, &item.quantity)?;

        Ok(consumed)
    }

    /// Cook a recipe
    ///
    /// Each ingredient uses up the first item whose name contains it, logging the
    /// recipe amount as consumed. Ingredients with no matching item are skipped.
    pub fn consume_ingredients(
        &mut self,
        ingredients: &[RecipeIngredient],
    ) -> Result<Vec<ConsumedItem>> {
        let mut items = self.items()?;
        let mut log = self.consumed()?;
        let mut cooked = Vec::new();

        for ingredient in ingredients {
            let found = items.iter().position(|i| ingredient.matches(&i.name));
            let Some(index) = found else {
                continue;
            };

            let item = items.remove(index);
            cooked.push(ConsumedItem {
                id: ulid::Ulid::new().to_string(),
                item_name: item.name,
                consumed_date: Utc::now(),
                method: ConsumeMethod::Recipe,
                quantity: ingredient.amount(),
            });
        }

        if cooked.is_empty() {
            return Ok(cooked);
        }

        log.extend(cooked.iter().cloned());
        save_json(&mut self.store, CONSUMED_KEY, &log)?;
        save_json(&mut self.store, ITEMS_KEY, &items)?;
        tracing::info!(consumed = cooked.len(), "cooked recipe");

        Ok(cooked)
    }

    pub fn ingredient_availability(
        &self,
        ingredient: &RecipeIngredient,
        today: NaiveDate,
    ) -> Result<IngredientAvailability> {
        let items = self.items()?;
        let Some(item) = items.iter().find(|item| ingredient.matches(&item.name)) else {
            return Ok(IngredientAvailability::Missing);
        };

        Ok(match expiry_status(item.expiry_date, today) {
            ExpiryStatus::Critical | ExpiryStatus::Warning => IngredientAvailability::Expiring,
            ExpiryStatus::Safe => IngredientAvailability::Available,
        })
    }

    /// Put the ingredients the inventory cannot cover on the shopping list
    pub fn add_missing_to_shopping(&mut self, ingredients: &[RecipeIngredient]) -> Result<usize> {
        let items = self.items()?;
        let in_stock = |ingredient: &RecipeIngredient| {
            items.iter().any(|item| ingredient.matches(&item.name))
        };
        let missing: Vec<&RecipeIngredient> = ingredients
            .iter()
            .filter(|ingredient| !in_stock(ingredient))
            .collect();

        ShoppingList::new(&mut self.store).add_missing(missing)
    }

    pub fn list(&self, query: &InventoryQuery, today: NaiveDate) -> Result<Vec<FoodItem>> {
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut items: Vec<FoodItem> = self
            .items()?
            .into_iter()
            .filter(|item| match &search {
                Some(search) => item.name.to_lowercase().contains(search.as_str()),
                None => true,
            })
            .filter(|item| query.category.is_none_or(|c| item.category == c))
            .filter(|item| query.storage.is_none_or(|s| item.storage == s))
            .filter(|item| match query.expiry {
                Some(ExpiryFilter::Expiring) => matches!(
                    expiry_status(item.expiry_date, today),
                    ExpiryStatus::Critical | ExpiryStatus::Warning
                ),
                Some(ExpiryFilter::Fresh) => {
                    expiry_status(item.expiry_date, today) == ExpiryStatus::Safe
                }
                None => true,
            })
            .collect();

        match query.sort_by {
            SortBy::Expiry => sort_by_expiry(&mut items, today),
            SortBy::DateAdded => items.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
            SortBy::Name => items.sort_by_key(|item| item.name.to_lowercase()),
            SortBy::Category => items.sort_by(|a, b| a.category.as_ref().cmp(b.category.as_ref())),
        }

        Ok(items)
    }

    pub fn dashboard(&self, today: NaiveDate, now: DateTime<Utc>) -> Result<Dashboard> {
        let items = self.items()?;
        let consumed = self.consumed()?;
        Ok(Dashboard::build(&items, &consumed, today, now))
    }
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
}
