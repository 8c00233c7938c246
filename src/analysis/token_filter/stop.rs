//! Stop word removal.
//!
//! Only used when a classifier is configured with `remove_stop_words`. The
//! English list is the short 33-word list; anything longer starts eating
//! words that do separate categories ("not", "no" are already borderline).

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

pub static ENGLISH_STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
        "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
        "these", "they", "this", "to", "was", "will", "with",
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

/// Drops tokens whose text is in the stop list.
///
/// Matching is exact, so run it after lowercasing and before stemming.
///
/// ```
/// use textbayes::analysis::token::Token;
/// use textbayes::analysis::token_filter::Filter;
/// use textbayes::analysis::token_filter::stop::{ENGLISH_STOP_WORDS, StopFilter};
///
/// let filter = StopFilter::with_stop_words(ENGLISH_STOP_WORDS.clone());
/// let tokens = vec![Token::new("win", 0), Token::new("a", 1), Token::new("prize", 2)];
///
/// let kept: Vec<String> = filter
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(kept, vec!["win", "prize"]);
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<HashSet<String>>,
    drop_stopped: bool,
}

impl StopFilter {
    pub fn with_stop_words(words: HashSet<String>) -> Self {
        StopFilter {
            words: Arc::new(words),
            drop_stopped: true,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(Into::into).collect())
    }

    /// Leave stop words in the stream, marked as stopped.
    pub fn keep_marked(mut self) -> Self {
        self.drop_stopped = false;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn mark(&self, token: Token) -> Token {
        if !token.is_stopped() && self.is_stop_word(&token.text) {
            token.stop()
        } else {
            token
        }
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let this = self.clone();
        let marked = tokens.map(move |token| this.mark(token));

        if self.drop_stopped {
            Ok(Box::new(marked.filter(|token| !token.is_stopped())))
        } else {
            Ok(Box::new(marked))
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(filter: &StopFilter, words: &[&str]) -> Vec<Token> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        filter.filter(Box::new(tokens.into_iter())).unwrap().collect()
    }

    #[test]
    fn test_drops_english_stop_words() {
        let filter = StopFilter::with_stop_words(ENGLISH_STOP_WORDS.clone());
        let kept = run(&filter, &["this", "is", "a", "refund", "and", "more"]);

        let texts: Vec<&str> = kept.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["refund", "more"]);
        assert_eq!(kept[0].position, 3);
    }

    #[test]
    fn test_keep_marked() {
        let filter = StopFilter::from_words(["the"]).keep_marked();
        let result = run(&filter, &["the", "invoice"]);

        assert_eq!(result.len(), 2);
        assert!(result[0].is_stopped());
        assert!(!result[1].is_stopped());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let filter = StopFilter::from_words(["the"]);
        assert_eq!(run(&filter, &["The"]).len(), 1);
    }

    #[test]
    fn test_english_list() {
        assert_eq!(ENGLISH_STOP_WORDS.len(), 33);
        assert!(ENGLISH_STOP_WORDS.contains("with"));
        assert!(!ENGLISH_STOP_WORDS.contains("guitar"));
    }
}
