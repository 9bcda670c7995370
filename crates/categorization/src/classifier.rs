use freshbite_shared::{Category, Confidence, KeyValueStore};
use serde::Serialize;

use crate::keywords::{CATEGORY_KEYWORDS, PRIORITY_ORDER};
use crate::preferences::{PreferenceStore, normalize_name};

/// Marker reported as the matched keyword when a learned override was used
pub const LEARNED_KEYWORD: &str = "learned";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
}

impl ClassificationResult {
    fn unmatched() -> Self {
        Self {
            category: Category::Others,
            confidence: Confidence::Low,
            matched_keyword: None,
        }
    }

    fn matched(category: Category, confidence: Confidence, keyword: &str) -> Self {
        Self {
            category,
            confidence,
            matched_keyword: Some(keyword.to_owned()),
        }
    }
}

struct KeywordMatch<'a> {
    category: Category,
    word: &'a str,
    position: usize,
}

/// Keyword Classifier
///
/// Maps a free-text product name to a category. Learned overrides are consulted
/// first; otherwise every word of the name is compared against each category's
/// keyword dictionary using containment in both directions, so "eggs" hits
/// "egg" and "choco" hits "chocolate".
///
/// Ties between categories are settled by:
/// 1. a match on the first word of the name (table order among those)
/// 2. the fixed priority order in [`PRIORITY_ORDER`]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Classify a product name, honouring learned overrides
    pub fn classify<S: KeyValueStore>(
        product_name: &str,
        preferences: &PreferenceStore<S>,
    ) -> ClassificationResult {
        if product_name.trim().chars().count() < 2 {
            return ClassificationResult::unmatched();
        }

        let normalized = normalize_name(product_name);

        if let Some(category) = preferences.lookup(&normalized) {
            tracing::debug!(
                name = %normalized,
                category = %category,
                "using learned category"
            );
            return ClassificationResult::matched(category, Confidence::High, LEARNED_KEYWORD);
        }

        Self::classify_keywords(&normalized)
    }

    /// Keyword matching only, on an already normalized name
    pub fn classify_keywords(normalized: &str) -> ClassificationResult {
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let mut matches = Vec::new();

        for (category, keywords) in CATEGORY_KEYWORDS {
            for (position, &word) in words.iter().enumerate() {
                // One match per (category, word) is enough
                if keywords
                    .iter()
                    .any(|keyword| word.contains(keyword) || keyword.contains(word))
                {
                    matches.push(KeywordMatch {
                        category: *category,
                        word,
                        position,
                    });
                }
            }
        }

        let result = match matches.len() {
            0 => ClassificationResult::unmatched(),
            1 => ClassificationResult::matched(
                matches[0].category,
                Confidence::High,
                matches[0].word,
            ),
            _ => Self::resolve_tie(&mut matches),
        };

        tracing::debug!(
            name = normalized,
            matches = matches.len(),
            category = %result.category,
            confidence = %result.confidence,
            "classified product"
        );

        result
    }

    fn resolve_tie(matches: &mut [KeywordMatch<'_>]) -> ClassificationResult {
        // Stable, so table order is kept among equal positions
        matches.sort_by_key(|m| m.position);

        if let Some(first_word) = matches.iter().find(|m| m.position == 0) {
            return ClassificationResult::matched(
                first_word.category,
                Confidence::High,
                first_word.word,
            );
        }

        for priority in PRIORITY_ORDER {
            if let Some(m) = matches.iter().find(|m| m.category == *priority) {
                return ClassificationResult::matched(m.category, Confidence::High, m.word);
            }
        }

        ClassificationResult::matched(matches[0].category, Confidence::Low, matches[0].word)
    }
}
