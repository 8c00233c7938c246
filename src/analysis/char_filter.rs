//! Char filters that rewrite raw text before tokenization.
//!
//! # Available Filters
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization, NFKC by default

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod unicode_normalize;

pub use unicode_normalize::{NormalizationForm, UnicodeNormalizationCharFilter};
