//! Text analysis for the classifier.
//!
//! The classifier treats tokenization as an injected collaborator: anything
//! implementing [`Analyzer`](analyzer::Analyzer) can turn text into tokens.
//! This module provides the building blocks and the default
//! [`StandardAnalyzer`](analyzer::StandardAnalyzer).

pub mod analyzer;
pub mod char_filter;
pub mod language;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer, TokenizerConfig};
pub use language::Language;
pub use token::{Token, TokenStream};
