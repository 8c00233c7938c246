//! Criterion benchmarks for the textbayes classifier.
//!
//! Covers text analysis, training throughput, classification latency and
//! snapshot encoding.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use textbayes::analysis::analyzer::{Analyzer, StandardAnalyzer};
use textbayes::classifier::NaiveBayesClassifier;

const CATEGORIES: [&str; 4] = ["sports", "politics", "technology", "cooking"];

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<(String, String)> {
    let words = [
        "match", "goal", "team", "season", "election", "vote", "policy", "senate", "compiler",
        "kernel", "network", "database", "recipe", "oven", "flour", "simmer", "running",
        "quickly", "players", "voters", "servers", "tasted",
    ];

    (0..count)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()].to_string();
            let text = (0..40)
                .map(|j| words[(i * 7 + j * 13 + (i % CATEGORIES.len()) * 5) % words.len()])
                .collect::<Vec<_>>()
                .join(" ");
            (category, text)
        })
        .collect()
}

fn trained_classifier(documents: &[(String, String)]) -> NaiveBayesClassifier {
    let classifier = NaiveBayesClassifier::new();
    for (category, text) in documents {
        classifier.train(category, text).unwrap();
    }
    classifier
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = StandardAnalyzer::new();
    let documents = generate_test_documents(100);
    let total_bytes: usize = documents.iter().map(|(_, text)| text.len()).sum();

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(total_bytes as u64));
    group.bench_function("standard_analyzer", |b| {
        b.iter(|| {
            for (_, text) in &documents {
                let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });
    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let documents = generate_test_documents(1000);

    let mut group = c.benchmark_group("training");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("train_1000_documents", |b| {
        b.iter(|| black_box(trained_classifier(&documents)))
    });
    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let documents = generate_test_documents(1000);
    let classifier = trained_classifier(&documents);
    let queries = generate_test_documents(50);

    let mut group = c.benchmark_group("classification");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("classify", |b| {
        b.iter(|| {
            for (_, text) in &queries {
                black_box(classifier.classify(black_box(text)).unwrap());
            }
        })
    });
    group.bench_function("scores", |b| {
        b.iter(|| {
            for (_, text) in &queries {
                black_box(classifier.scores(black_box(text)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let classifier = trained_classifier(&generate_test_documents(1000));
    let mut encoded = Vec::new();
    classifier.save(&mut encoded).unwrap();

    let mut group = c.benchmark_group("snapshot");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("save", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(encoded.len());
            classifier.save(&mut buffer).unwrap();
            black_box(buffer);
        })
    });
    group.bench_function("load", |b| {
        let target = NaiveBayesClassifier::new();
        b.iter(|| target.load(black_box(encoded.as_slice())).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_analysis,
    bench_training,
    bench_classification,
    bench_snapshot
);
criterion_main!(benches);
