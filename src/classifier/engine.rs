//! The naive Bayes classifier engine.
//!
//! [`NaiveBayesClassifier`] owns the model behind a single reader/writer lock.
//! Training, untraining, reset and load take the write side; scoring,
//! classification, summaries and save take the read side. Readers therefore
//! only ever observe the model between two complete writes.
//!
//! Scores are additive: each distinct input token contributes
//! `occurrences * P(category | token)` to every category, where the per-token
//! posterior uses the category's share of all trained tokens as its prior.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::analysis::analyzer::{
    Analyzer, StandardAnalyzer, TokenizerConfig, analyze_to_terms,
};
use crate::classifier::category::normalize_category;
use crate::classifier::config::ClassifierConfig;
use crate::classifier::store::{CategoryState, Model, TokenOccurrences, count_occurrences};
use crate::classifier::types::{CategorySummary, ClassificationPrediction};
use crate::error::Result;
use crate::persistence::file::{open_for_read, resolve_model_path, write_atomically};
use crate::persistence::snapshot::{self, DecodedSnapshot, PersistedModel};

struct EngineState {
    model: Model,
    analyzer: Arc<dyn Analyzer>,
}

/// A trainable, thread-safe naive Bayes text classifier.
///
/// # Examples
///
/// ```
/// use textbayes::classifier::NaiveBayesClassifier;
///
/// let classifier = NaiveBayesClassifier::new();
/// classifier.train("spam", "win free money now").unwrap();
/// classifier.train("ham", "lunch meeting moved to noon").unwrap();
///
/// let prediction = classifier.classify("free money").unwrap();
/// assert_eq!(prediction.category.as_deref(), Some("spam"));
/// ```
pub struct NaiveBayesClassifier {
    state: RwLock<EngineState>,
    model_path: PathBuf,
}

impl NaiveBayesClassifier {
    /// Create an empty classifier with the default English analyzer.
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create an empty classifier from a configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        let analyzer = Arc::new(StandardAnalyzer::with_config(config.tokenizer_config()));
        Self::build(analyzer, config.model_path)
    }

    /// Create an empty classifier that tokenizes with a custom analyzer.
    ///
    /// Custom analyzers carry no persisted configuration, so snapshots saved
    /// from this classifier have no `tokenizer` section.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::build(analyzer, ClassifierConfig::default().model_path)
    }

    fn build(analyzer: Arc<dyn Analyzer>, model_path: PathBuf) -> Self {
        NaiveBayesClassifier {
            state: RwLock::new(EngineState {
                model: Model::new(),
                analyzer,
            }),
            model_path,
        }
    }

    /// The model file used when no explicit path is given.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// The analyzer currently used for tokenization.
    pub fn analyzer(&self) -> Arc<dyn Analyzer> {
        Arc::clone(&self.state.read().analyzer)
    }

    /// The persisted configuration of the current analyzer, if it has one.
    pub fn tokenizer_config(&self) -> Option<TokenizerConfig> {
        tokenizer_config_of(self.state.read().analyzer.as_ref())
    }

    /// Number of trained categories.
    pub fn category_count(&self) -> usize {
        self.state.read().model.len()
    }

    /// Add the tokens of `text` to `category`, creating the category if needed.
    ///
    /// Fails with an invalid argument error, without touching the model, when
    /// `category` does not match the category grammar.
    pub fn train(&self, category: &str, text: &str) -> Result<()> {
        let category = normalize_category(category)?;

        let mut state = self.state.write();
        let occurrences = tokenize(state.analyzer.as_ref(), text)?;

        let trained = state.model.get_or_insert(category);
        trained.add_occurrences(&occurrences);
        debug!(
            "trained {:?} with {} tokens (tally {})",
            trained.name(),
            occurrences.values().sum::<u64>(),
            trained.token_tally()
        );

        state.model.recalculate_priors();
        Ok(())
    }

    /// Remove the tokens of `text` from `category`.
    ///
    /// Counts never drop below zero, and the category disappears once its
    /// tally reaches zero. Unknown categories are ignored.
    pub fn untrain(&self, category: &str, text: &str) -> Result<()> {
        let category = normalize_category(category)?;

        let mut state = self.state.write();
        if !state.model.contains(category) {
            debug!("untrain ignored for unknown category {category:?}");
            return Ok(());
        }

        let occurrences = tokenize(state.analyzer.as_ref(), text)?;
        let Some(untrained) = state.model.get_mut(category) else {
            return Ok(());
        };
        untrained.remove_occurrences(&occurrences);
        let remaining = untrained.token_tally();

        if remaining == 0 {
            state.model.remove(category);
            debug!("untrained {category:?} down to zero tokens, category removed");
        } else {
            debug!("untrained {category:?} (tally {remaining})");
        }

        state.model.recalculate_priors();
        Ok(())
    }

    /// Remove every category.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.model.clear();
        state.model.recalculate_priors();
        debug!("model reset");
    }

    /// Score `text` against every category.
    ///
    /// Only categories with a positive score appear in the result. Tokens the
    /// model has never seen contribute nothing.
    pub fn scores(&self, text: &str) -> Result<BTreeMap<String, f32>> {
        let state = self.state.read();
        let occurrences = tokenize(state.analyzer.as_ref(), text)?;
        Ok(compute_scores(&state.model, &occurrences))
    }

    /// Pick the best scoring category for `text`.
    ///
    /// Equal scores resolve to the name that sorts first. An empty score map
    /// yields [`ClassificationPrediction::none`].
    pub fn classify(&self, text: &str) -> Result<ClassificationPrediction> {
        let scores = self.scores(text)?;
        Ok(select_best(&scores))
    }

    /// Statistics for every category, keyed by display name.
    pub fn summaries(&self) -> BTreeMap<String, CategorySummary> {
        let state = self.state.read();
        state
            .model
            .categories()
            .map(|category| (category.name().to_string(), category.summary()))
            .collect()
    }

    /// Write a snapshot of the model to `writer`.
    ///
    /// The lock is held only while the snapshot is captured, not while it is
    /// written.
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        let snapshot = self.capture();
        snapshot::encode(&snapshot, writer)?;
        debug!("saved {} categories", snapshot.categories.len());
        Ok(())
    }

    /// Replace the model with a snapshot read from `reader`.
    ///
    /// The snapshot is fully validated first; on any error the current model
    /// is left as it was. A snapshot carrying tokenizer settings also replaces
    /// the analyzer.
    pub fn load<R: Read>(&self, reader: R) -> Result<()> {
        let DecodedSnapshot { model, tokenizer } = snapshot::decode(reader).inspect_err(|err| {
            if let Some(reason) = err.snapshot_error() {
                warn!("rejected model snapshot: {reason}");
            }
        })?;

        let analyzer = tokenizer
            .map(|config| Arc::new(StandardAnalyzer::with_config(config)) as Arc<dyn Analyzer>);

        let mut state = self.state.write();
        state.model = model;
        state.model.recalculate_priors();
        if let Some(analyzer) = analyzer {
            state.analyzer = analyzer;
        }
        debug!("loaded {} categories", state.model.len());
        Ok(())
    }

    /// Atomically write the model to `path`, or to the configured model path.
    pub fn save_to_file(&self, path: Option<&Path>) -> Result<()> {
        let path = resolve_model_path(Some(path.unwrap_or(&self.model_path)))?;
        let snapshot = self.capture();

        write_atomically(&path, |writer| snapshot::encode(&snapshot, writer))?;
        info!(
            "saved {} categories to {}",
            snapshot.categories.len(),
            path.display()
        );
        Ok(())
    }

    /// Load the model from `path`, or from the configured model path.
    pub fn load_from_file(&self, path: Option<&Path>) -> Result<()> {
        let path = resolve_model_path(Some(path.unwrap_or(&self.model_path)))?;
        let reader = open_for_read(&path)?;

        self.load(reader)?;
        info!("loaded model from {}", path.display());
        Ok(())
    }

    fn capture(&self) -> PersistedModel {
        let state = self.state.read();
        let tokenizer = tokenizer_config_of(state.analyzer.as_ref());
        PersistedModel::capture(&state.model, tokenizer)
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("NaiveBayesClassifier")
            .field("categories", &state.model.len())
            .field("analyzer", &state.analyzer.name())
            .field("model_path", &self.model_path)
            .finish()
    }
}

fn tokenizer_config_of(analyzer: &dyn Analyzer) -> Option<TokenizerConfig> {
    analyzer
        .as_any()
        .downcast_ref::<StandardAnalyzer>()
        .map(StandardAnalyzer::config)
}

fn tokenize(analyzer: &dyn Analyzer, text: &str) -> Result<TokenOccurrences> {
    Ok(count_occurrences(analyze_to_terms(analyzer, text)?))
}

fn compute_scores(model: &Model, occurrences: &TokenOccurrences) -> BTreeMap<String, f32> {
    let mut scores: BTreeMap<String, f32> = BTreeMap::new();

    for (token, input_count) in occurrences {
        let total_token_count: u64 = model
            .categories()
            .map(|category| category.folded_count(token))
            .sum();
        if total_token_count == 0 {
            continue;
        }

        for category in model.categories() {
            let probability =
                bayesian_probability(category, category.folded_count(token), total_token_count);
            *scores.entry(category.name().to_string()).or_insert(0.0) +=
                *input_count as f32 * probability;
        }
    }

    scores.retain(|_, score| *score > 0.0);
    scores
}

fn select_best(scores: &BTreeMap<String, f32>) -> ClassificationPrediction {
    let mut best: Option<&str> = None;
    let mut best_score = 0.0_f32;

    // Ascending name order plus a strict comparison keeps the first of equal scores.
    for (name, &score) in scores {
        if score > best_score {
            best = Some(name);
            best_score = score;
        }
    }

    match best {
        Some(name) => ClassificationPrediction::new(name, best_score),
        None => ClassificationPrediction::none(),
    }
}

/// Single-token posterior `P(category | token)` from the category's cached priors.
pub(crate) fn bayesian_probability(
    category: &CategoryState,
    token_score: u64,
    total_token_count: u64,
) -> f32 {
    if total_token_count == 0 {
        return 0.0;
    }

    let total = total_token_count as f32;
    let token_score = token_score as f32;
    let p_token_given_category = token_score / total;
    let p_token_given_non_category = (total - token_score) / total;

    let numerator = p_token_given_category * category.prior_category();
    let denominator = numerator + p_token_given_non_category * category.prior_non_category();

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
