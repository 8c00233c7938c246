//! The classifier's default analyzer.
//!
//! # Pipeline
//!
//! 1. UnicodeNormalizationCharFilter (NFKC)
//! 2. AlphanumericTokenizer
//! 3. LowercaseFilter
//! 4. StopFilter (only when `remove_stop_words` is set)
//! 5. StemFilter (the language's stemmer)
//!
//! # Examples
//!
//! ```
//! use textbayes::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("The Guitars were TUNED").unwrap().collect();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["the", "guitar", "were", "tune"]);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::UnicodeNormalizationCharFilter;
use crate::analysis::language::Language;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
use crate::error::Result;

/// The configurable state of a [`StandardAnalyzer`].
///
/// This is what snapshots persist under their `tokenizer` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenizerConfig {
    /// Language used for stemming and stop words
    pub language: Language,
    /// Whether stop words are dropped before stemming
    pub remove_stop_words: bool,
}

impl TokenizerConfig {
    pub fn new(language: Language, remove_stop_words: bool) -> Self {
        TokenizerConfig {
            language,
            remove_stop_words,
        }
    }
}

/// The default analyzer: normalize, split, lowercase, optionally drop stop words, stem.
pub struct StandardAnalyzer {
    config: TokenizerConfig,
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create an English analyzer that keeps stop words.
    pub fn new() -> Self {
        Self::with_config(TokenizerConfig::default())
    }

    /// Create an analyzer for the given language and stop word setting.
    pub fn with_config(config: TokenizerConfig) -> Self {
        let mut analyzer = PipelineAnalyzer::new(Arc::new(AlphanumericTokenizer::new()))
            .add_char_filter(Arc::new(UnicodeNormalizationCharFilter::default()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        if config.remove_stop_words {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::with_stop_words(
                config.language.stop_words(),
            )));
        }

        let inner = analyzer
            .add_filter(Arc::new(StemFilter::with_stemmer(config.language.stemmer())))
            .with_name(format!("standard_{}", config.language));

        StandardAnalyzer { config, inner }
    }

    /// The configuration this analyzer was built from.
    pub fn config(&self) -> TokenizerConfig {
        self.config
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("config", &self.config)
            .field("inner", &self.inner)
            .finish()
    }
}
