//! Command implementations for the textbayes CLI.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::classifier::{ClassifierConfig, NaiveBayesClassifier};
use crate::cli::args::*;
use crate::cli::output::*;

/// Execute a CLI command.
pub fn execute_command(args: TextBayesArgs) -> Result<()> {
    let config = load_config(&args)?;
    let classifier = open_classifier(config)?;

    match &args.command {
        Command::Train(sample) => train(&classifier, sample, &args),
        Command::Untrain(sample) => untrain(&classifier, sample, &args),
        Command::Classify(input) => classify(&classifier, input, &args),
        Command::Scores(input) => scores(&classifier, input, &args),
        Command::Summaries => summaries(&classifier, &args),
        Command::Reset => reset(&classifier, &args),
    }
}

/// Build the effective configuration: config file first, then flags.
fn load_config(args: &TextBayesArgs) -> Result<ClassifierConfig> {
    let mut config = match &args.config {
        Some(path) => ClassifierConfig::from_file(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?,
        None => ClassifierConfig::default(),
    };

    if let Some(language) = args.language() {
        config = config.with_language(language);
    }
    if args.remove_stop_words {
        config = config.with_remove_stop_words(true);
    }
    if let Some(model) = &args.model {
        config = config.with_model_path(model);
    }

    debug!("effective config: {config:?}");
    Ok(config)
}

/// Create the classifier and load the model file when one exists.
fn open_classifier(config: ClassifierConfig) -> Result<NaiveBayesClassifier> {
    let classifier = NaiveBayesClassifier::with_config(config);

    match classifier.load_from_file(None) {
        Ok(()) => {
            if let Some(tokenizer) = classifier.tokenizer_config() {
                debug!(
                    "using tokenizer stored with the model: {} (remove stop words: {})",
                    tokenizer.language, tokenizer.remove_stop_words
                );
            }
        }
        Err(err) if err.is_not_found() => {
            info!(
                "no model at {}, starting empty",
                classifier.model_path().display()
            );
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!(
                    "failed to load model from {}",
                    classifier.model_path().display()
                )
            });
        }
    }

    Ok(classifier)
}

fn read_text(input: &TextArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}

fn save(classifier: &NaiveBayesClassifier) -> Result<()> {
    classifier.save_to_file(None).with_context(|| {
        format!(
            "failed to save model to {}",
            classifier.model_path().display()
        )
    })
}

fn update_result(
    classifier: &NaiveBayesClassifier,
    action: &'static str,
    category: Option<&str>,
) -> UpdateResult {
    UpdateResult {
        action,
        category: category.map(|c| c.trim().to_string()),
        categories: classifier.category_count(),
        model_path: classifier.model_path().display().to_string(),
    }
}

fn train(classifier: &NaiveBayesClassifier, sample: &SampleArgs, args: &TextBayesArgs) -> Result<()> {
    let text = read_text(&sample.input)?;
    classifier.train(&sample.category, &text)?;
    save(classifier)?;

    output_update(
        &update_result(classifier, "trained", Some(&sample.category)),
        args,
    )?;
    Ok(())
}

fn untrain(
    classifier: &NaiveBayesClassifier,
    sample: &SampleArgs,
    args: &TextBayesArgs,
) -> Result<()> {
    let text = read_text(&sample.input)?;
    classifier.untrain(&sample.category, &text)?;
    save(classifier)?;

    output_update(
        &update_result(classifier, "untrained", Some(&sample.category)),
        args,
    )?;
    Ok(())
}

fn classify(classifier: &NaiveBayesClassifier, input: &TextArgs, args: &TextBayesArgs) -> Result<()> {
    let text = read_text(input)?;
    let prediction = classifier.classify(&text)?;
    output_prediction(&prediction, args)?;
    Ok(())
}

fn scores(classifier: &NaiveBayesClassifier, input: &TextArgs, args: &TextBayesArgs) -> Result<()> {
    let text = read_text(input)?;
    let result = ScoresResult {
        scores: classifier.scores(&text)?,
    };
    output_scores(&result, args)?;
    Ok(())
}

fn summaries(classifier: &NaiveBayesClassifier, args: &TextBayesArgs) -> Result<()> {
    let result = SummariesResult {
        categories: classifier.summaries(),
    };
    output_summaries(&result, args)?;
    Ok(())
}

fn reset(classifier: &NaiveBayesClassifier, args: &TextBayesArgs) -> Result<()> {
    classifier.reset();
    save(classifier)?;

    output_update(&update_result(classifier, "reset", None), args)?;
    Ok(())
}
