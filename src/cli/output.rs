//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cli::args::{OutputFormat, TextBayesArgs};
use crate::classifier::{CategorySummary, ClassificationPrediction};
use crate::error::Result;

/// Result structure for train, untrain and reset.
#[derive(Debug, Serialize)]
pub struct UpdateResult {
    pub action: &'static str,
    pub category: Option<String>,
    pub categories: usize,
    pub model_path: String,
}

/// Result structure for the scores command.
#[derive(Debug, Serialize)]
pub struct ScoresResult {
    pub scores: BTreeMap<String, f32>,
}

/// Result structure for the summaries command.
#[derive(Debug, Serialize)]
pub struct SummariesResult {
    pub categories: BTreeMap<String, CategorySummary>,
}

/// Render a model update.
pub fn output_update(result: &UpdateResult, args: &TextBayesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                match &result.category {
                    Some(category) => println!("{} {category}", result.action),
                    None => println!("{}", result.action),
                }
                if args.verbosity() > 1 {
                    println!(
                        "{} categories saved to {}",
                        result.categories, result.model_path
                    );
                }
            }
            Ok(())
        }
    }
}

/// Render a classification.
pub fn output_prediction(prediction: &ClassificationPrediction, args: &TextBayesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(prediction, args),
        OutputFormat::Human => {
            match &prediction.category {
                Some(category) => println!("{category}\t{:.6}", prediction.score),
                None => println!("(no prediction)"),
            }
            Ok(())
        }
    }
}

/// Render category scores, best first.
pub fn output_scores(result: &ScoresResult, args: &TextBayesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if result.scores.is_empty() {
                println!("(no scores)");
                return Ok(());
            }

            let mut ranked: Vec<(&String, &f32)> = result.scores.iter().collect();
            ranked.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (category, score) in ranked {
                println!("{category}\t{score:.6}");
            }
            Ok(())
        }
    }
}

/// Render category summaries as a table.
pub fn output_summaries(result: &SummariesResult, args: &TextBayesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if result.categories.is_empty() {
                println!("(no categories)");
                return Ok(());
            }

            let width = result
                .categories
                .keys()
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max("CATEGORY".len());
            println!("{:<width$}  {:>10}  {:>8}  {:>12}", "CATEGORY", "TALLY", "PRIOR", "NON-PRIOR");
            for (name, summary) in &result.categories {
                println!(
                    "{:<width$}  {:>10}  {:>8.4}  {:>12.4}",
                    name, summary.token_tally, summary.prior_category, summary.prior_non_category
                );
            }
            Ok(())
        }
    }
}

fn output_json<T: Serialize>(result: &T, args: &TextBayesArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
