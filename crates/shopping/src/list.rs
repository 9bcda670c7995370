//! Shopping list persisted under [`SHOPPING_KEY`]

use freshbite_categorization::SmartSuggestions;
use freshbite_shared::recipe::RecipeIngredient;
use freshbite_shared::shopping::{ItemSource, ShoppingListItem};
use freshbite_shared::store::{load_json, save_json};
use freshbite_shared::{Category, Error, KeyValueStore, Result, bail};

pub const SHOPPING_KEY: &str = "freshbite_shopping";

const DEFAULT_QUANTITY: &str = "1";

#[derive(Debug, Clone, Default)]
pub struct AddShoppingItem {
    pub name: String,
    /// Detected from the name when absent
    pub category: Option<Category>,
    /// Defaults to "1"
    pub quantity: Option<String>,
}

pub struct ShoppingList<S> {
    store: S,
}

impl<S: KeyValueStore> ShoppingList<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn list(&self) -> Result<Vec<ShoppingListItem>> {
        load_json(&self.store, SHOPPING_KEY)
    }

    /// Add an item typed in by the user
    pub fn add(&mut self, input: AddShoppingItem) -> Result<ShoppingListItem> {
        let name = input.name.trim();
        if name.is_empty() {
            bail!("Please enter an item name");
        }

        let category = match input.category {
            Some(category) => category,
            None => {
                SmartSuggestions::new(&mut self.store)
                    .classify(name)
                    .category
            }
        };

        let quantity = input
            .quantity
            .map(|q| q.trim().to_owned())
            .filter(|q| !q.is_empty())
            .unwrap_or_else(|| DEFAULT_QUANTITY.to_owned());

        self.push(name.to_owned(), category, quantity, ItemSource::Manual)
    }

    /// Add a restock entry, used when an inventory item is consumed
    pub fn add_auto(
        &mut self,
        name: &str,
        category: Category,
        quantity: &str,
    ) -> Result<ShoppingListItem> {
        self.push(
            name.to_owned(),
            category,
            quantity.to_owned(),
            ItemSource::Auto,
        )
    }

    /// Add recipe ingredients that are not in the inventory
    ///
    /// Entries are filed under `Others` with the recipe amount as quantity.
    /// Returns how many were added.
    pub fn add_missing<'a>(
        &mut self,
        ingredients: impl IntoIterator<Item = &'a RecipeIngredient>,
    ) -> Result<usize> {
        let mut items = self.list()?;
        let before = items.len();

        for ingredient in ingredients {
            let name = ingredient.name.trim();
            if name.is_empty() {
                continue;
            }

            items.push(ShoppingListItem {
                id: ulid::Ulid::new().to_string(),
                name: name.to_owned(),
                category: Category::Others,
                quantity: ingredient.amount(),
                is_completed: false,
                source: ItemSource::Manual,
            });
        }

        let added = items.len() - before;
        if added > 0 {
            save_json(&mut self.store, SHOPPING_KEY, &items)?;
            tracing::info!(added, "added missing recipe ingredients");
        }

        Ok(added)
    }

    pub fn set_completed(&mut self, id: &str, is_completed: bool) -> Result<ShoppingListItem> {
        let mut items = self.list()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(format!("shopping item {id}")))?;

        item.is_completed = is_completed;
        let updated = item.clone();
        save_json(&mut self.store, SHOPPING_KEY, &items)?;

        Ok(updated)
    }

    pub fn remove(&mut self, id: &str) -> Result<ShoppingListItem> {
        let mut items = self.list()?;
        let Some(index) = items.iter().position(|item| item.id == id) else {
            return Err(Error::NotFound(format!("shopping item {id}")));
        };

        let removed = items.remove(index);
        save_json(&mut self.store, SHOPPING_KEY, &items)?;

        Ok(removed)
    }

    /// Drop every completed item, returning how many were removed
    pub fn clear_completed(&mut self) -> Result<usize> {
        let items = self.list()?;
        let before = items.len();
        let pending: Vec<ShoppingListItem> =
            items.into_iter().filter(|item| !item.is_completed).collect();

        let removed = before - pending.len();
        if removed > 0 {
            save_json(&mut self.store, SHOPPING_KEY, &pending)?;
            tracing::info!(removed, "cleared completed shopping items");
        }

        Ok(removed)
    }

    /// Items grouped by category, groups in order of first appearance
    pub fn grouped(&self) -> Result<Vec<(Category, Vec<ShoppingListItem>)>> {
        let mut groups: Vec<(Category, Vec<ShoppingListItem>)> = Vec::new();

        for item in self.list()? {
            let group = groups
                .iter_mut()
                .find(|(category, _)| *category == item.category);
            match group {
                Some((_, items)) => items.push(item),
                None => groups.push((item.category, vec![item])),
            }
        }

        Ok(groups)
    }

    /// Plain-text rendering of the pending items, for sharing
    pub fn share_text(&self) -> Result<String> {
        let lines: Vec<String> = self
            .list()?
            .iter()
            .filter(|item| !item.is_completed)
            .map(|item| format!("- {} ({})", item.name, item.quantity))
            .collect();

        Ok(format!("My Shopping List:\n\n{}", lines.join("\n")))
    }

    fn push(
        &mut self,
        name: String,
        category: Category,
        quantity: String,
        source: ItemSource,
    ) -> Result<ShoppingListItem> {
        let mut items = self.list()?;
        let item = ShoppingListItem {
            id: ulid::Ulid::new().to_string(),
            name,
            category,
            quantity,
            is_completed: false,
            source,
        };

        items.push(item.clone());
        save_json(&mut self.store, SHOPPING_KEY, &items)?;
        tracing::info!(
            id = %item.id,
            name = %item.name,
            source = %item.source,
            "added shopping item"
        );

        Ok(item)
    }
}
