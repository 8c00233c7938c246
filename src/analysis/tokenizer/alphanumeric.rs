//! Letter-or-digit tokenizer.
//!
//! Every maximal run of alphabetic or numeric characters becomes one token;
//! whitespace, punctuation and symbols only separate tokens. Apostrophes are
//! separators too, so "don't" yields "don" and "t".

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on any character that is not a letter or digit.
///
/// # Examples
///
/// ```
/// use textbayes::analysis::tokenizer::Tokenizer;
/// use textbayes::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
///
/// let tokenizer = AlphanumericTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("café-au-lait, 2 cups").unwrap().collect();
///
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, vec!["café", "au", "lait", "2", "cups"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlphanumericTokenizer;

impl AlphanumericTokenizer {
    /// Create a new letter-or-digit tokenizer.
    pub fn new() -> Self {
        AlphanumericTokenizer
    }
}

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (c.is_alphanumeric(), start) {
                (true, None) => start = Some(offset),
                (false, Some(begin)) => {
                    tokens.push(Token::with_offsets(
                        &text[begin..offset],
                        tokens.len(),
                        begin,
                        offset,
                    ));
                    start = None;
                }
                _ => {}
            }
        }

        if let Some(begin) = start {
            tokens.push(Token::with_offsets(
                &text[begin..],
                tokens.len(),
                begin,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
