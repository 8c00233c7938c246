//! Integration tests for training, scoring and classification behaviour.

use std::sync::Arc;

use textbayes::analysis::analyzer::PipelineAnalyzer;
use textbayes::analysis::token_filter::LowercaseFilter;
use textbayes::analysis::tokenizer::alphanumeric::AlphanumericTokenizer;
use textbayes::error::Result;
use textbayes::prelude::*;

#[test]
fn test_tie_break_prefers_lexically_smaller_name() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    classifier.train("zulu", "alpha beta")?;
    classifier.train("apple", "alpha beta")?;

    for _ in 0..10 {
        let prediction = classifier.classify("alpha beta")?;
        assert_eq!(prediction.category.as_deref(), Some("apple"));
    }

    Ok(())
}

#[test]
fn test_tie_break_is_ordinal() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    classifier.train("apple", "alpha")?;
    classifier.train("Zulu", "alpha")?;

    // Uppercase sorts before lowercase in ordinal order.
    let prediction = classifier.classify("alpha")?;
    assert_eq!(prediction.category.as_deref(), Some("Zulu"));

    Ok(())
}

#[test]
fn test_volume_weighted_priors() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    classifier.train("heavy", "topic topic topic topic topic")?;
    classifier.train("light", "topic")?;

    let prediction = classifier.classify("topic")?;
    assert_eq!(prediction.category.as_deref(), Some("heavy"));

    let summaries = classifier.summaries();
    assert!(summaries["heavy"].prior_category > summaries["light"].prior_category);

    Ok(())
}

#[test]
fn test_train_then_untrain_leaves_no_scores() -> Result<()> {
    let texts = [
        "The quick brown fox jumps over the lazy dog",
        "Naïve café résumé",
        "numbers 123 and symbols !@# mixed in",
        "",
    ];

    for text in texts {
        let classifier = NaiveBayesClassifier::new();
        classifier.train("sample", text)?;
        classifier.untrain("sample", text)?;

        assert!(classifier.scores(text)?.is_empty(), "text: {text:?}");
        assert!(classifier.summaries().is_empty(), "text: {text:?}");
    }

    Ok(())
}

#[test]
fn test_untrain_more_than_trained_removes_category() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    classifier.train("pets", "cat")?;
    classifier.train("farm", "cow")?;

    classifier.untrain("pets", "cat cat cat cat")?;

    let summaries = classifier.summaries();
    assert!(!summaries.contains_key("pets"));
    assert_eq!(summaries["farm"].prior_category, 1.0);

    Ok(())
}

#[test]
fn test_unseen_vocabulary_does_not_influence_scores() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    classifier.train("weather", "rain snow wind")?;
    classifier.train("sports", "goal match referee")?;

    let plain = classifier.scores("rain")?;
    let noisy = classifier.scores("rain xylophone quasar zeppelin")?;
    assert_eq!(plain, noisy);

    Ok(())
}

#[test]
fn test_scores_only_include_positive_categories() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    classifier.train("weather", "rain snow wind")?;
    classifier.train("sports", "goal match referee")?;

    let scores = classifier.scores("rain snow")?;
    assert_eq!(scores.len(), 1);
    assert!(scores["weather"] > 0.0);

    Ok(())
}

#[test]
fn test_repeated_input_tokens_scale_score() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    classifier.train("a", "shared unique")?;
    classifier.train("b", "shared")?;

    let once = classifier.scores("shared")?;
    let twice = classifier.scores("shared shared")?;
    assert!((twice["a"] - 2.0 * once["a"]).abs() < 1e-6);

    Ok(())
}

#[test]
fn test_classify_handles_any_text() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    assert!(classifier.classify("")?.is_none());
    assert!(classifier.classify("   \n\t")?.is_none());

    classifier.train("lang", "rust cargo crate")?;
    for text in ["", "🦀🦀🦀", "ÅÄÖ", "cargo"] {
        let prediction = classifier.classify(text)?;
        assert!(prediction.score >= 0.0);
    }
    assert_eq!(
        classifier.classify("cargo")?.category.as_deref(),
        Some("lang")
    );

    Ok(())
}

#[test]
fn test_invalid_category_names_are_rejected() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    let too_long = "a".repeat(65);

    for name in ["", "with space", "semi;colon", "ünïcode", too_long.as_str()] {
        let err = classifier.train(name, "text").unwrap_err();
        assert!(err.is_invalid_argument(), "{name:?}");
    }
    assert!(classifier.summaries().is_empty());

    classifier.train(&"a".repeat(64), "text")?;
    classifier.train("  padded  ", "text")?;
    assert!(classifier.summaries().contains_key("padded"));

    Ok(())
}

#[test]
fn test_stop_words_configuration() -> Result<()> {
    let keep = NaiveBayesClassifier::new();
    keep.train("articles", "the the the")?;
    assert_eq!(keep.summaries()["articles"].token_tally, 3);

    let filtered = NaiveBayesClassifier::with_config(
        ClassifierConfig::new().with_remove_stop_words(true),
    );
    filtered.train("articles", "the the the")?;
    assert_eq!(filtered.summaries()["articles"].token_tally, 0);

    Ok(())
}

#[test]
fn test_stemming_groups_word_forms() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    classifier.train("music", "guitars playing")?;

    let prediction = classifier.classify("guitar played")?;
    assert_eq!(prediction.category.as_deref(), Some("music"));

    Ok(())
}

#[test]
fn test_custom_pipeline_analyzer() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(AlphanumericTokenizer::new()))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .with_name("unstemmed");
    let classifier = NaiveBayesClassifier::with_analyzer(Arc::new(analyzer));

    classifier.train("music", "guitars")?;
    assert!(classifier.classify("guitar")?.is_none());
    assert_eq!(
        classifier.classify("GUITARS")?.category.as_deref(),
        Some("music")
    );
    assert!(classifier.tokenizer_config().is_none());

    Ok(())
}
