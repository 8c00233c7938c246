//! Supported analysis languages.
//!
//! Languages form a closed set resolved once when an analyzer is built. Each
//! language maps to a stemmer and a stop word list at compile time; unknown
//! names fall back to [`Language::English`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::{PorterStemmer, Stemmer};
use crate::analysis::token_filter::stop::ENGLISH_STOP_WORDS;
use crate::error::TextBayesError;

/// A language the default analyzer knows how to stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    /// English: Porter stemmer and the English stop word list.
    #[default]
    English,
    /// The original Porter algorithm, kept as a distinct name for stored models.
    Porter,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 2] = [Language::English, Language::Porter];

    /// Canonical lowercase name, as written to snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Porter => "porter",
        }
    }

    /// Resolve a language name, falling back to English for unknown or empty input.
    pub fn resolve(name: &str) -> Language {
        match name.parse() {
            Ok(language) => language,
            Err(_) => {
                if !name.trim().is_empty() {
                    log::warn!("unsupported language {name:?}, falling back to english");
                }
                Language::English
            }
        }
    }

    /// The stemmer for this language.
    pub fn stemmer(&self) -> Box<dyn Stemmer> {
        match self {
            Language::English | Language::Porter => Box::new(PorterStemmer::new()),
        }
    }

    /// The stop word list for this language.
    pub fn stop_words(&self) -> HashSet<String> {
        match self {
            Language::English | Language::Porter => ENGLISH_STOP_WORDS.clone(),
        }
    }
}

impl FromStr for Language {
    type Err = TextBayesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == normalized)
            .ok_or_else(|| TextBayesError::invalid_argument(format!("unsupported language: {s}")))
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language::resolve(&value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_languages() {
        assert_eq!(Language::resolve("english"), Language::English);
        assert_eq!(Language::resolve("  PORTER "), Language::Porter);
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        assert_eq!(Language::resolve(""), Language::English);
        assert_eq!(Language::resolve("klingon"), Language::English);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Language::Porter).unwrap();
        assert_eq!(json, "\"porter\"");

        let language: Language = serde_json::from_str("\"Spanish\"").unwrap();
        assert_eq!(language, Language::English);
    }

    #[test]
    fn test_language_resources() {
        assert_eq!(Language::English.stemmer().name(), "porter");
        assert!(Language::Porter.stop_words().contains("the"));
    }
}
