//! # textbayes
//!
//! A trainable, in-memory naive Bayes text classifier.
//!
//! ## Features
//!
//! - Thread-safe training, untraining and scoring behind one reader/writer lock
//! - Pluggable text analysis with a stemming default analyzer
//! - Deterministic, validated JSON snapshots
//! - Atomic model files
//!
//! ## Example
//!
//! ```
//! use textbayes::prelude::*;
//!
//! let classifier = NaiveBayesClassifier::new();
//! classifier.train("heavy", "topic topic topic topic topic").unwrap();
//! classifier.train("light", "topic").unwrap();
//!
//! let prediction = classifier.classify("topic").unwrap();
//! assert_eq!(prediction.category.as_deref(), Some("heavy"));
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod persistence;

pub mod prelude {
    pub use crate::analysis::{Analyzer, Language, StandardAnalyzer, TokenizerConfig};
    pub use crate::classifier::{
        CategorySummary, ClassificationPrediction, ClassifierConfig, NaiveBayesClassifier,
    };
    pub use crate::error::{Result, TextBayesError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
