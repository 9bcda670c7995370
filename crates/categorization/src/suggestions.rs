use freshbite_shared::{Category, Confidence, KeyValueStore, Result, StorageLocation};
use serde::Serialize;

use crate::advisor::StorageAdvisor;
use crate::classifier::{ClassificationResult, KeywordClassifier};
use crate::preferences::PreferenceStore;

/// Category and storage recommendation for a product name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub category: Category,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
    pub storage: StorageLocation,
    pub reason: &'static str,
}

/// Entry point used by the inventory, the shopping list and the CLI.
///
/// Runs the classifier (learned overrides first) and feeds its category into the
/// storage advisor.
pub struct SmartSuggestions<S> {
    preferences: PreferenceStore<S>,
}

impl<S: KeyValueStore> SmartSuggestions<S> {
    pub fn new(store: S) -> Self {
        Self {
            preferences: PreferenceStore::new(store),
        }
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceStore<S> {
        &mut self.preferences
    }

    pub fn classify(&self, product_name: &str) -> ClassificationResult {
        KeywordClassifier::classify(product_name, &self.preferences)
    }

    pub fn suggest(&self, product_name: &str) -> Suggestion {
        let classification = self.classify(product_name);
        let storage = StorageAdvisor::suggest(classification.category, product_name);

        Suggestion {
            category: classification.category,
            confidence: classification.confidence,
            matched_keyword: classification.matched_keyword,
            storage: storage.storage,
            reason: storage.reason,
        }
    }

    /// Record the user's category choice for a product name
    pub fn correct(&mut self, product_name: &str, category: Category) -> Result<()> {
        self.preferences.record_override(product_name, category)
    }

    /// Record the choice only when it differs from what would be detected
    ///
    /// Returns whether an override was stored.
    pub fn learn_if_overridden(&mut self, product_name: &str, category: Category) -> Result<bool> {
        if self.classify(product_name).category == category {
            return Ok(false);
        }

        self.correct(product_name, category)?;
        Ok(true)
    }
}
