//! Suggestion source backed by the product catalog.
//!
//! Candidates are the distinct display names, brands, categories and sports
//! of all products. A candidate matches when it contains the keyword
//! case-insensitively; candidates starting with the keyword rank first, then
//! the rest, each group alphabetically.

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::suggest::base::{SuggestError, SuggestionSource};

pub struct CatalogSuggestionSource {
    /// Lowercased candidate paired with its original spelling.
    candidates: Vec<(String, String)>,
}

impl CatalogSuggestionSource {
    pub fn new(catalog: &Catalog) -> Self {
        let mut seen = BTreeSet::new();
        let mut candidates = Vec::new();

        for product in catalog.products() {
            let terms = [
                Some(product.display_name()),
                product.brand.as_deref(),
                product.category.as_deref(),
                product.sport.as_deref(),
            ];
            for term in terms.into_iter().flatten() {
                let term = term.trim();
                if term.is_empty() {
                    continue;
                }
                let lower = term.to_lowercase();
                if seen.insert(lower.clone()) {
                    candidates.push((lower, term.to_string()));
                }
            }
        }

        Self { candidates }
    }

    fn rank(&self, keyword: &str, limit: usize) -> Vec<String> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut prefixed = Vec::new();
        let mut contained = Vec::new();
        for (lower, original) in &self.candidates {
            if lower.starts_with(&needle) {
                prefixed.push((lower, original));
            } else if lower.contains(&needle) {
                contained.push((lower, original));
            }
        }
        prefixed.sort();
        contained.sort();

        prefixed
            .into_iter()
            .chain(contained)
            .take(limit)
            .map(|(_, original)| original.clone())
            .collect()
    }
}

#[async_trait]
impl SuggestionSource for CatalogSuggestionSource {
    async fn suggest(&self, keyword: &str, limit: usize) -> Result<Vec<String>, SuggestError> {
        Ok(self.rank(keyword, limit))
    }
}
