//! Category Store: per-category token tables and cached priors.
//!
//! The store is plain data. Locking, tokenization and the decision of when
//! to recompute priors belong to the engine that owns it.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::classifier::category::category_key;
use crate::classifier::types::CategorySummary;

/// Token occurrence counts for one piece of text, keyed by folded token.
///
/// Ordered so that score accumulation visits tokens in a stable order.
pub(crate) type TokenOccurrences = BTreeMap<String, u64>;

/// Fold tokens to their case-insensitive key and count repeats.
pub(crate) fn count_occurrences<I>(tokens: I) -> TokenOccurrences
where
    I: IntoIterator<Item = String>,
{
    let mut counts = TokenOccurrences::new();
    for token in tokens {
        *counts.entry(fold_token(&token)).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn fold_token(token: &str) -> String {
    token.to_lowercase()
}

/// Statistics for one trained category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryState {
    name: String,
    token_counts: AHashMap<String, u64>,
    token_tally: u64,
    prior_category: f32,
    prior_non_category: f32,
}

impl CategoryState {
    pub(crate) fn new<S: Into<String>>(name: S) -> Self {
        CategoryState {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a category from already validated counts. `token_tally` must equal their sum.
    pub(crate) fn from_counts<S: Into<String>>(
        name: S,
        token_counts: AHashMap<String, u64>,
        token_tally: u64,
    ) -> Self {
        CategoryState {
            name: name.into(),
            token_counts,
            token_tally,
            ..Default::default()
        }
    }

    /// The category name with its original casing.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token_tally(&self) -> u64 {
        self.token_tally
    }

    pub fn prior_category(&self) -> f32 {
        self.prior_category
    }

    pub fn prior_non_category(&self) -> f32 {
        self.prior_non_category
    }

    /// Count recorded for a token, 0 when absent.
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_counts
            .get(&fold_token(token))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct tokens in the table.
    pub fn vocabulary_size(&self) -> usize {
        self.token_counts.len()
    }

    /// Iterate over `(token, count)` pairs in no particular order.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, u64)> {
        self.token_counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            token_tally: self.token_tally,
            prior_category: self.prior_category,
            prior_non_category: self.prior_non_category,
        }
    }

    /// Lookup by an already folded key.
    pub(crate) fn folded_count(&self, key: &str) -> u64 {
        self.token_counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn add_occurrences(&mut self, occurrences: &TokenOccurrences) {
        for (token, count) in occurrences {
            *self.token_counts.entry(token.clone()).or_insert(0) += count;
            self.token_tally += count;
        }
    }

    /// Subtract occurrences, clamping each token at zero and dropping emptied tokens.
    pub(crate) fn remove_occurrences(&mut self, occurrences: &TokenOccurrences) {
        for (token, count) in occurrences {
            let Some(current) = self.token_counts.get_mut(token) else {
                continue;
            };

            if *count >= *current {
                self.token_tally -= *current;
                self.token_counts.remove(token);
            } else {
                *current -= count;
                self.token_tally -= count;
            }
        }
    }

    fn set_priors(&mut self, total_token_tally: u64) {
        self.prior_category = if total_token_tally > 0 {
            self.token_tally as f32 / total_token_tally as f32
        } else {
            0.0
        };
        self.prior_non_category = 1.0 - self.prior_category;
    }
}

/// All trained categories, keyed case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    categories: AHashMap<String, CategoryState>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a category by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&CategoryState> {
        self.categories.get(&category_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(&category_key(name))
    }

    /// Iterate over categories in no particular order.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryState> {
        self.categories.values()
    }

    /// Sum of every category's tally.
    pub fn total_token_tally(&self) -> u64 {
        self.categories.values().map(|c| c.token_tally).sum()
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut CategoryState> {
        self.categories.get_mut(&category_key(name))
    }

    /// Fetch a category, creating it with `name` as its display name when absent.
    pub(crate) fn get_or_insert(&mut self, name: &str) -> &mut CategoryState {
        self.categories
            .entry(category_key(name))
            .or_insert_with(|| CategoryState::new(name))
    }

    /// Insert a category, returning false (and leaving the model unchanged) on a name clash.
    pub(crate) fn insert_new(&mut self, state: CategoryState) -> bool {
        let key = category_key(&state.name);
        if self.categories.contains_key(&key) {
            return false;
        }
        self.categories.insert(key, state);
        true
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<CategoryState> {
        self.categories.remove(&category_key(name))
    }

    pub(crate) fn clear(&mut self) {
        self.categories.clear();
    }

    /// Recompute every category's priors from scratch.
    pub(crate) fn recalculate_priors(&mut self) {
        let total_token_tally = self.total_token_tally();
        for category in self.categories.values_mut() {
            category.set_priors(total_token_tally);
        }
    }
}
