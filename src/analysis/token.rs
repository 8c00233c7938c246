//! Tokens flowing through the analysis pipeline.
//!
//! Tokenizers create tokens with byte offsets into the analyzed text; filters
//! rewrite `text` or mark a token stopped. The classifier counts the final
//! `text` of every token that is still live.

use serde::{Deserialize, Serialize};

/// One unit of analyzed text.
///
/// ```
/// use textbayes::analysis::token::Token;
///
/// let token = Token::with_offsets("Guitars", 1, 4, 11).with_text("guitar");
/// assert_eq!(token.text, "guitar");
/// assert_eq!((token.start_offset, token.end_offset), (4, 11));
/// assert!(!token.is_stopped());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Index in the tokenizer's output
    pub position: usize,
    /// Byte range in the text the tokenizer saw
    pub start_offset: usize,
    pub end_offset: usize,
    /// Set by filters that want the token ignored downstream
    pub stopped: bool,
}

impl Token {
    /// A token without offsets, handy for analyzers that do not track them.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Mark the token so later filters and the classifier skip it.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Swap the text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

/// Boxed token iterator passed between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
