//! Result types returned by the classifier.

use serde::{Deserialize, Serialize};

/// The outcome of [`classify`](crate::classifier::NaiveBayesClassifier::classify).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationPrediction {
    /// Best matching category, or `None` when nothing scored above zero
    pub category: Option<String>,
    /// Score of the selected category (0 when there is no prediction)
    pub score: f32,
}

impl ClassificationPrediction {
    pub fn new<S: Into<String>>(category: S, score: f32) -> Self {
        ClassificationPrediction {
            category: Some(category.into()),
            score,
        }
    }

    /// A result carrying no prediction.
    pub fn none() -> Self {
        ClassificationPrediction {
            category: None,
            score: 0.0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.category.is_none()
    }
}

/// Read-only projection of one category's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Total token occurrences trained into the category
    pub token_tally: u64,
    /// Share of all trained tokens held by this category
    pub prior_category: f32,
    /// `1 - prior_category`
    pub prior_non_category: f32,
}
