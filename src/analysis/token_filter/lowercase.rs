//! Lowercase filter.
//!
//! Folding case here makes "Free", "FREE" and "free" count as one token in a
//! category's table.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases every token that has not been stopped.
///
/// ```
/// use textbayes::analysis::token_filter::Filter;
/// use textbayes::analysis::token_filter::lowercase::LowercaseFilter;
/// use textbayes::analysis::token::Token;
///
/// let tokens = vec![Token::new("FREE", 0), Token::new("ÜBER", 1)];
/// let lowered: Vec<String> = LowercaseFilter::new()
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
///
/// assert_eq!(lowered, vec!["free", "über"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

fn lowercase_token(token: Token) -> Token {
    if token.is_stopped() || !token.text.chars().any(char::is_uppercase) {
        return token;
    }

    let lowered = if token.text.is_ascii() {
        token.text.to_ascii_lowercase()
    } else {
        token.text.to_lowercase()
    };
    token.with_text(lowered)
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(lowercase_token)))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
