//! Command line argument parsing for the textbayes CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::analysis::language::Language;

/// textbayes - A trainable naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "textbayes")]
#[command(about = "Train and query a naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextBayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Model file (absolute path)
    #[arg(short, long, value_name = "PATH", env = "TEXTBAYES_MODEL", global = true)]
    pub model: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", env = "TEXTBAYES_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Stemming language (english, porter)
    #[arg(short, long, env = "TEXTBAYES_LANGUAGE", global = true)]
    pub language: Option<String>,

    /// Drop stop words before stemming
    #[arg(long, env = "TEXTBAYES_REMOVE_STOP_WORDS", global = true)]
    pub remove_stop_words: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextBayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n.saturating_add(1),
            }
        }
    }

    /// The language flag, resolved with the usual fallback.
    pub fn language(&self) -> Option<Language> {
        self.language.as_deref().map(Language::resolve)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a text sample to a category
    Train(SampleArgs),

    /// Remove a text sample from a category
    Untrain(SampleArgs),

    /// Print the best matching category for a text
    Classify(TextArgs),

    /// Print every positive category score for a text
    Scores(TextArgs),

    /// Print per-category statistics
    Summaries,

    /// Remove every category from the model
    Reset,
}

/// Arguments for train and untrain
#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Category name (letters, digits, '_' or '-', up to 64 characters)
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[command(flatten)]
    pub input: TextArgs,
}

/// Where to read the text from
#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    /// Text to process (reads stdin when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_train() {
        let args =
            TextBayesArgs::try_parse_from(["textbayes", "train", "spam", "free money"]).unwrap();

        match args.command {
            Command::Train(sample) => {
                assert_eq!(sample.category, "spam");
                assert_eq!(sample.input.text.as_deref(), Some("free money"));
                assert!(sample.input.file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = TextBayesArgs::try_parse_from([
            "textbayes",
            "classify",
            "hello",
            "--format",
            "json",
            "--model",
            "/tmp/m.json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.model, Some(PathBuf::from("/tmp/m.json")));
        assert_eq!(args.verbosity(), 3);
    }

    #[test]
    fn test_verbosity() {
        let args = TextBayesArgs::try_parse_from(["textbayes", "summaries"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = TextBayesArgs::try_parse_from(["textbayes", "-q", "-vvv", "reset"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = TextBayesArgs::try_parse_from([
            "textbayes", "scores", "text", "--file", "/tmp/in.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_language_resolution() {
        let args =
            TextBayesArgs::try_parse_from(["textbayes", "--language", "PORTER", "reset"]).unwrap();
        assert_eq!(args.language(), Some(Language::Porter));
    }
}
