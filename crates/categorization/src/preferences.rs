//! Learned category overrides
//!
//! When a user changes an auto-detected category, the choice is remembered for
//! that exact product name and wins over keyword matching from then on. The
//! mapping is a single JSON object stored under [`CUSTOM_MAPPINGS_KEY`].
//!
//! Reads fail open: a missing, unreadable or malformed record behaves like an
//! empty mapping.

use std::collections::BTreeMap;

use freshbite_shared::{Category, KeyValueStore, Result, bail, store::save_json};

pub const CUSTOM_MAPPINGS_KEY: &str = "freshbite_custom_categories";

/// Lower-case and trim a product name the way lookups expect
pub fn normalize_name(product_name: &str) -> String {
    product_name.trim().to_lowercase()
}

pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Exact lookup on the normalized name, no fuzzy matching
    pub fn lookup(&self, product_name: &str) -> Option<Category> {
        self.mappings().get(&normalize_name(product_name)).copied()
    }

    pub fn entries(&self) -> BTreeMap<String, Category> {
        self.mappings()
    }

    /// Remember `category` for `product_name`, replacing any previous choice
    pub fn record_override(&mut self, product_name: &str, category: Category) -> Result<()> {
        let name = normalize_name(product_name);
        if name.is_empty() {
            bail!("product name is required");
        }

        let mut mappings = self.mappings();
        mappings.insert(name.clone(), category);
        save_json(&mut self.store, CUSTOM_MAPPINGS_KEY, &mappings)?;

        tracing::info!(
            name = %name,
            category = %category,
            "learned category override"
        );

        Ok(())
    }

    /// Drop a learned override, returning whether one existed
    pub fn forget(&mut self, product_name: &str) -> Result<bool> {
        let name = normalize_name(product_name);
        let mut mappings = self.mappings();
        if mappings.remove(&name).is_none() {
            return Ok(false);
        }

        save_json(&mut self.store, CUSTOM_MAPPINGS_KEY, &mappings)?;
        tracing::info!(name = %name, "forgot category override");

        Ok(true)
    }

    fn mappings(&self) -> BTreeMap<String, Category> {
        let raw = match self.store.get(CUSTOM_MAPPINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("failed to read learned categories: {e}");
                return BTreeMap::new();
            }
        };

        let labels: BTreeMap<String, String> = match serde_json::from_str(&raw) {
            Ok(labels) => labels,
            Err(e) => {
                tracing::warn!("ignoring malformed learned categories: {e}");
                return BTreeMap::new();
            }
        };

        labels
            .into_iter()
            .filter_map(|(name, label)| match Category::from_label(&label) {
                Ok(category) => Some((name, category)),
                Err(e) => {
                    tracing::warn!(name = %name, "skipping learned category: {e}");
                    None
                }
            })
            .collect()
    }
}
