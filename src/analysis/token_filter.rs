//! Token filters applied after tokenizing.
//!
//! The standard chain is lowercase, then stop words when enabled, then the
//! stemmer. Order matters: the stop list holds lowercase, unstemmed words.
//!
//! A filter takes ownership of the stream and returns a new one:
//!
//! ```
//! use textbayes::analysis::token::TokenStream;
//! use textbayes::analysis::token_filter::Filter;
//! use textbayes::error::Result;
//!
//! /// Ignores bare numbers, which rarely say anything about a category.
//! struct SkipNumbers;
//!
//! impl Filter for SkipNumbers {
//!     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
//!         Ok(Box::new(tokens.filter(|t| !t.text.chars().all(|c| c.is_ascii_digit()))))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "skip_numbers"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Shown in `Debug` output of the owning analyzer.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stem;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
