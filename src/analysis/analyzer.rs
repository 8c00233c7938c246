//! Turning raw sample text into the tokens a category counts.
//!
//! The classifier only sees text through [`Analyzer`], so a custom one can be
//! passed to
//! [`NaiveBayesClassifier::with_analyzer`](crate::classifier::NaiveBayesClassifier::with_analyzer).
//! [`StandardAnalyzer`] is what every other constructor uses; [`PipelineAnalyzer`]
//! assembles other chains from the same parts.
//!
//! ```
//! use textbayes::analysis::analyzer::{Analyzer, analyze_to_terms};
//! use textbayes::analysis::token::{Token, TokenStream};
//! use textbayes::error::Result;
//!
//! /// Treats each comma separated field as one token.
//! struct FieldAnalyzer;
//!
//! impl Analyzer for FieldAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let fields: Vec<Token> = text
//!             .split(',')
//!             .enumerate()
//!             .map(|(i, field)| Token::new(field.trim(), i))
//!             .collect();
//!         Ok(Box::new(fields.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "field"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//!
//! let terms = analyze_to_terms(&FieldAnalyzer, "red, , blue").unwrap();
//! assert_eq!(terms, vec!["red", "blue"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Converts text into tokens.
///
/// Implementations must be deterministic: the same text and configuration
/// always yield the same tokens. The classifier relies on this to make
/// untraining an exact inverse of training.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;

    /// Lets the classifier recover a [`StandardAnalyzer`]'s configuration.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Run an analyzer and keep the text of every token that was not stopped.
pub fn analyze_to_terms(analyzer: &dyn Analyzer, text: &str) -> Result<Vec<String>> {
    Ok(analyzer
        .analyze(text)?
        .filter(|token| !token.is_stopped() && !token.text.trim().is_empty())
        .map(|token| token.text)
        .collect())
}

mod pipeline;
mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::{StandardAnalyzer, TokenizerConfig};
