pub mod advisor;
pub mod classifier;
pub mod keywords;
pub mod preferences;
pub mod suggestions;

// Re-export commonly used types
pub use advisor::{StorageAdvisor, StorageSuggestion};
pub use classifier::{ClassificationResult, KeywordClassifier, LEARNED_KEYWORD};
pub use preferences::{CUSTOM_MAPPINGS_KEY, PreferenceStore, normalize_name};
pub use suggestions::{SmartSuggestions, Suggestion};
