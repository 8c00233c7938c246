//! The classifier: category store, engine and result types.
//!
//! # Examples
//!
//! ```
//! use textbayes::classifier::NaiveBayesClassifier;
//!
//! let classifier = NaiveBayesClassifier::new();
//! classifier.train("apple", "alpha beta").unwrap();
//! classifier.train("zulu", "alpha beta").unwrap();
//!
//! // Equal scores resolve to the name that sorts first.
//! let prediction = classifier.classify("alpha beta").unwrap();
//! assert_eq!(prediction.category.as_deref(), Some("apple"));
//! ```

pub mod category;
pub mod config;
pub mod engine;
pub mod store;
pub mod types;

pub use category::{MAX_CATEGORY_NAME_LEN, is_valid_category_name, normalize_category};
pub use config::ClassifierConfig;
pub use engine::NaiveBayesClassifier;
pub use store::{CategoryState, Model};
pub use types::{CategorySummary, ClassificationPrediction};
