//! Stemming, so "offers", "offered" and "offering" share one token count.

use std::fmt;
use std::sync::Arc;

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Reduces a word to its stem. Shared across threads through the analyzer.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;

    fn name(&self) -> &'static str;
}

pub mod porter;

pub use porter::PorterStemmer;

/// Rewrites live tokens with their stem and drops any that stem to blank.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl StemFilter {
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter {
            stemmer: Arc::from(stemmer),
        }
    }

    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::with_stemmer(Box::new(PorterStemmer::new()))
    }
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StemFilter({})", self.stemmer.name())
    }
}

fn stem_token(stemmer: &dyn Stemmer, token: Token) -> Option<Token> {
    if token.is_stopped() {
        return Some(token);
    }
    let stemmed = stemmer.stem(&token.text);
    (!stemmed.trim().is_empty()).then(|| token.with_text(stemmed))
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(
            tokens.filter_map(move |token| stem_token(stemmer.as_ref(), token)),
        ))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(filter: &StemFilter, tokens: Vec<Token>) -> Vec<Token> {
        filter.filter(Box::new(tokens.into_iter())).unwrap().collect()
    }

    #[test]
    fn test_live_tokens_are_stemmed() {
        let result = apply(
            &StemFilter::default(),
            vec![
                Token::new("offers", 0),
                Token::new("winning", 1),
                Token::new("prizes", 2).stop(),
            ],
        );

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["offer", "win", "prizes"]);
        assert!(result[2].is_stopped());
    }

    struct Eraser;

    impl Stemmer for Eraser {
        fn stem(&self, _word: &str) -> String {
            " ".to_string()
        }

        fn name(&self) -> &'static str {
            "eraser"
        }
    }

    #[test]
    fn test_blank_stems_are_dropped() {
        let filter = StemFilter::with_stemmer(Box::new(Eraser));

        assert!(apply(&filter, vec![Token::new("anything", 0)]).is_empty());
        assert_eq!(filter.stemmer_name(), "eraser");
        assert_eq!(format!("{filter:?}"), "StemFilter(eraser)");
    }
}
