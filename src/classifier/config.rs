//! Classifier configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::TokenizerConfig;
use crate::analysis::language::Language;
use crate::error::Result;
use crate::persistence::file::DEFAULT_MODEL_PATH;

/// Settings for a [`NaiveBayesClassifier`](crate::classifier::NaiveBayesClassifier).
///
/// Every field has a default, so a config file only needs to name the
/// settings it changes:
///
/// ```
/// use textbayes::analysis::Language;
/// use textbayes::classifier::ClassifierConfig;
///
/// let config: ClassifierConfig = serde_json::from_str(r#"{"removeStopWords": true}"#).unwrap();
/// assert_eq!(config.language, Language::English);
/// assert!(config.remove_stop_words);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Language used by the default analyzer
    pub language: Language,
    /// Drop stop words before stemming
    pub remove_stop_words: bool,
    /// Model file used when no explicit path is passed to save or load
    pub model_path: PathBuf,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            language: Language::default(),
            remove_stop_words: false,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_remove_stop_words(mut self, remove_stop_words: bool) -> Self {
        self.remove_stop_words = remove_stop_words;
        self
    }

    pub fn with_model_path<P: Into<PathBuf>>(mut self, model_path: P) -> Self {
        self.model_path = model_path.into();
        self
    }

    /// The analyzer settings carried by this config.
    pub fn tokenizer_config(&self) -> TokenizerConfig {
        TokenizerConfig::new(self.language, self.remove_stop_words)
    }
}
