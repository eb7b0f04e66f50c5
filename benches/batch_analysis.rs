//! Benchmarks for batch article scoring comparing sequential vs parallel performance.
//!
//! These benchmarks measure:
//! - Single-article scoring cost as text length grows
//! - Sequential batch scoring (parallelism.enabled = false)
//! - Parallel batch scoring (parallelism.enabled = true)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tempfile::TempDir;
use textmap::analyzers::batch::analyze_articles;
use textmap::config::BatchAnalysisConfig;
use textmap::io::{ArticleEntry, ArticleWalker};
use textmap::lexicon::{Lexicon, Lexicons};
use textmap::metrics::{ScoringSettings, TextAnalyzer};

const SENTENCES: [&str; 6] = [
    "The quarterly results were excellent and we expect continued growth.",
    "Analysts warned that the terrible supply situation could worsen.",
    "Our engineering teams delivered remarkable improvements this year.",
    "Customers reported disappointing delays in several regions.",
    "Management believes the opportunity remains extraordinarily promising.",
    "Is this sustainable? Nobody knows for certain!",
];

fn bench_lexicons() -> Lexicons {
    Lexicons::new(
        Lexicon::from_words(["the", "and", "we", "that", "could", "this", "our", "is", "in"]),
        Lexicon::from_words(["excellent", "remarkable", "promising", "growth"]),
        Lexicon::from_words(["terrible", "worsen", "disappointing", "delays"]),
    )
}

fn article_text(sentences: usize) -> String {
    SENTENCES
        .iter()
        .cycle()
        .take(sentences)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a store with `num_articles` articles of about forty sentences each.
fn create_test_articles(num_articles: usize) -> (TempDir, Vec<ArticleEntry>) {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..num_articles {
        let path = temp_dir.path().join(format!("{}.txt", 1000 + i));
        std::fs::write(&path, article_text(40 + i % 7)).unwrap();
    }
    let entries = ArticleWalker::new(temp_dir.path().to_path_buf())
        .walk()
        .unwrap();
    (temp_dir, entries)
}

fn benchmark_single_article(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_single_article");
    let lexicons = bench_lexicons();
    let analyzer = TextAnalyzer::new(&lexicons, ScoringSettings::default());

    for &sentences in &[10, 100, 1000] {
        let text = article_text(sentences);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sentences), &text, |b, text| {
            b.iter(|| black_box(analyzer.analyze("bench", text)));
        });
    }

    group.finish();
}

/// Compare sequential vs parallel directly for the same article counts.
fn benchmark_sequential_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_seq_vs_parallel");
    let lexicons = bench_lexicons();
    let analyzer = TextAnalyzer::new(&lexicons, ScoringSettings::default());

    for &size in &[10, 50, 200] {
        let (_temp_dir, entries) = create_test_articles(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &entries, |b, entries| {
            let config = BatchAnalysisConfig::default().sequential();
            b.iter(|| black_box(analyze_articles(entries, &analyzer, &config)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &entries, |b, entries| {
            let config = BatchAnalysisConfig::default();
            b.iter(|| black_box(analyze_articles(entries, &analyzer, &config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_article,
    benchmark_sequential_vs_parallel
);
criterion_main!(benches);
