//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step after char filtering: they split text into
//! [`Token`](crate::analysis::token::Token)s that the filter chain refines.
//!
//! # Available Tokenizers
//!
//! - [`alphanumeric::AlphanumericTokenizer`] - Splits on every non letter-or-digit character
//!
//! # Examples
//!
//! ```
//! use textbayes::analysis::tokenizer::Tokenizer;
//! use textbayes::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
//!
//! let tokenizer = AlphanumericTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve every
/// concurrent classifier caller.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;

pub use alphanumeric::AlphanumericTokenizer;
