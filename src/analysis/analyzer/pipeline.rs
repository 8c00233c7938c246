//! Analyzer assembled from a tokenizer and ordered filter stages.
//!
//! Char filters rewrite the raw text, the tokenizer splits it, then token
//! filters run over the stream in insertion order. Stop word removal must be
//! added before stemming so the stop list sees unstemmed words.
//!
//! ```
//! use std::sync::Arc;
//!
//! use textbayes::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use textbayes::analysis::token_filter::lowercase::LowercaseFilter;
//! use textbayes::analysis::token_filter::stop::StopFilter;
//! use textbayes::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(AlphanumericTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["a", "for"])))
//!     .with_name("spam_filter");
//!
//! let words: Vec<String> = analyzer
//!     .analyze("Cheap PILLS for a friend")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["cheap", "pills", "friend"]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    label: String,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    token_filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Start a pipeline with no filters; it is labelled after the tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            label: format!("pipeline_{}", tokenizer.name()),
            char_filters: Vec::new(),
            tokenizer,
            token_filters: Vec::new(),
        }
    }

    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.token_filters.push(filter);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    /// Label shown in logs and `Debug` output.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for char_filter in &self.char_filters {
            current = Cow::Owned(char_filter.filter(&current));
        }
        current
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let prepared = self.prepare(text);
        let stream = self.tokenizer.tokenize(&prepared)?;

        self.token_filters
            .iter()
            .try_fold(stream, |stream, filter| filter.filter(stream))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stages: Vec<&str> = self
            .char_filters
            .iter()
            .map(|c| c.name())
            .chain(std::iter::once(self.tokenizer.name()))
            .chain(self.token_filters.iter().map(|t| t.name()))
            .collect();

        f.debug_struct("PipelineAnalyzer")
            .field("label", &self.label)
            .field("stages", &stages)
            .finish()
    }
}
