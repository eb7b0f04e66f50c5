//! Integration tests for batch article scoring.
//!
//! These tests build a small project on disk (lexicons plus stored articles)
//! and verify row-per-article output, input ordering, parallel/sequential
//! agreement and failure isolation.

use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use textmap::analyzers::batch::{analyze_articles, into_analysis_results};
use textmap::config::{BatchAnalysisConfig, ParallelConfig};
use textmap::io::{ArticleEntry, ArticleWalker};
use textmap::lexicon::{load_lexicons, LexiconPaths};
use textmap::metrics::{ScoringSettings, TextAnalyzer, DEFAULT_EPSILON};

/// Helper to create a temp project with lexicons and the given articles.
fn create_test_project(articles: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    fs::create_dir_all(root.join("StopWords")).unwrap();
    fs::create_dir_all(root.join("MasterDictionary")).unwrap();
    fs::create_dir_all(root.join("articles")).unwrap();

    fs::write(
        root.join("StopWords/StopWords_Generic.txt"),
        indoc! {"
            | generic stopwords
            THE
            A
            AND
        "},
    )
    .unwrap();
    fs::write(
        root.join("StopWords/StopWords_Names.txt"),
        "SMITH | Surname\nJONES\n",
    )
    .unwrap();
    fs::write(
        root.join("MasterDictionary/positive-words.txt"),
        indoc! {"
            ; positive opinion words
            good
            excellent
        "},
    )
    .unwrap();
    fs::write(
        root.join("MasterDictionary/negative-words.txt"),
        indoc! {"
            ; negative opinion words
            bad
            terrible
        "},
    )
    .unwrap();

    for (id, text) in articles {
        fs::write(root.join("articles").join(format!("{}.txt", id)), text).unwrap();
    }

    temp_dir
}

fn lexicon_paths(root: &Path) -> LexiconPaths {
    LexiconPaths {
        stopwords_dir: root.join("StopWords"),
        positive_words: root.join("MasterDictionary/positive-words.txt"),
        negative_words: root.join("MasterDictionary/negative-words.txt"),
        ..Default::default()
    }
}

fn discover(root: &Path) -> Vec<ArticleEntry> {
    ArticleWalker::new(root.join("articles"))
        .walk()
        .expect("articles should be listed")
}

// ============================================================================
// End-to-end scoring
// ============================================================================

#[test]
fn test_scores_match_hand_computed_values() {
    let project = create_test_project(&[("101", "The good news. We won!")]);
    let lexicons = load_lexicons(&lexicon_paths(project.path())).unwrap();
    let analyzer = TextAnalyzer::new(&lexicons, ScoringSettings::default());

    let results = analyze_articles(
        &discover(project.path()),
        &analyzer,
        &BatchAnalysisConfig::default(),
    );

    // filtered words: good, news, we, won; segments: 3 (trailing empty piece)
    let record = &results[0].record;
    assert_eq!(record.url_id, "101");
    assert_eq!(record.word_count, 4);
    assert_eq!(record.positive_score, 1);
    assert_eq!(record.negative_score, 0);
    assert_eq!(record.complex_word_count, 0);
    assert_eq!(record.personal_pronouns, 1);
    assert!((record.avg_sentence_length - 4.0 / 3.0).abs() < 1e-12);
    assert!((record.fog_index - 0.4 * (4.0 / 3.0)).abs() < 1e-12);
    assert!((record.avg_word_length - 3.25).abs() < 1e-12);
    assert!((record.polarity_score - 1.0 / (1.0 + DEFAULT_EPSILON)).abs() < 1e-12);
    assert!((record.subjectivity_score - 1.0 / (4.0 + DEFAULT_EPSILON)).abs() < 1e-12);
    assert_eq!(record.avg_words_per_sentence(), record.avg_sentence_length);
}

#[test]
fn test_stopword_files_are_unioned_with_inline_comments_kept() {
    let project = create_test_project(&[("1", "Jones and Smith")]);
    let lexicons = load_lexicons(&lexicon_paths(project.path())).unwrap();

    assert!(lexicons.stopwords.contains("jones"));
    assert!(lexicons.stopwords.contains("the"));
    // only whole-line comments are skipped
    assert!(!lexicons.stopwords.contains("smith"));
    assert!(lexicons.stopwords.contains("smith | surname"));
}

#[test]
fn test_one_row_per_article_in_discovery_order() {
    let project = create_test_project(&[
        ("3", "Terrible."),
        ("1", "Good."),
        ("2", "Excellent and bad."),
    ]);
    let lexicons = load_lexicons(&lexicon_paths(project.path())).unwrap();
    let analyzer = TextAnalyzer::new(&lexicons, ScoringSettings::default());

    let report = into_analysis_results(analyze_articles(
        &discover(project.path()),
        &analyzer,
        &BatchAnalysisConfig::default(),
    ));

    let ids: Vec<_> = report.records.iter().map(|r| r.url_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(report.article_count(), 3);
    assert_eq!(report.records[1].positive_score, 1);
    assert_eq!(report.records[1].negative_score, 1);
}

// ============================================================================
// Failure isolation
// ============================================================================

#[test]
fn test_missing_article_yields_zero_row_without_aborting() {
    let project = create_test_project(&[("1", "Good day."), ("3", "Bad day.")]);
    let lexicons = load_lexicons(&lexicon_paths(project.path())).unwrap();
    let analyzer = TextAnalyzer::new(&lexicons, ScoringSettings::default());
    let entries = ArticleWalker::new(project.path().join("articles")).entries_for_ids(["1", "2", "3"]);

    let report = into_analysis_results(analyze_articles(
        &entries,
        &analyzer,
        &BatchAnalysisConfig::default(),
    ));

    assert_eq!(report.records.len(), 3);
    let missing = &report.records[1];
    assert_eq!(missing.url_id, "2");
    assert_eq!(missing.word_count, 0);
    assert_eq!(missing.positive_score, 0);
    assert_eq!(missing.polarity_score, 0.0);
    assert_eq!(missing.subjectivity_score, 0.0);
    assert_eq!(missing.avg_sentence_length, 0.0);
    assert_eq!(missing.fog_index, 0.0);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].url_id, "2");
    assert_eq!(report.records[2].negative_score, 1);
}

#[test]
fn test_missing_lexicon_is_configuration_error() {
    let project = create_test_project(&[]);
    let mut paths = lexicon_paths(project.path());
    paths.stopwords_dir = project.path().join("NoSuchDir");

    let err = load_lexicons(&paths).unwrap_err();
    assert!(err.is_fatal());
}

// ============================================================================
// Parallel execution
// ============================================================================

#[test]
fn test_parallel_chunks_match_sequential() {
    let articles: Vec<(String, String)> = (0..25)
        .map(|i| {
            (
                format!("{:03}", i),
                format!("Article {} is good. We think it is excellent! Or terrible?", i),
            )
        })
        .collect();
    let refs: Vec<(&str, &str)> = articles
        .iter()
        .map(|(id, text)| (id.as_str(), text.as_str()))
        .collect();
    let project = create_test_project(&refs);
    let lexicons = load_lexicons(&lexicon_paths(project.path())).unwrap();
    let analyzer = TextAnalyzer::new(&lexicons, ScoringSettings::default());
    let entries = discover(project.path());

    let parallel = analyze_articles(
        &entries,
        &analyzer,
        &BatchAnalysisConfig {
            parallelism: ParallelConfig {
                batch_size: Some(7),
                ..Default::default()
            },
            collect_timing: true,
        },
    );
    let sequential = analyze_articles(
        &entries,
        &analyzer,
        &BatchAnalysisConfig::default().sequential(),
    );

    assert_eq!(parallel.len(), 25);
    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.record, s.record);
        assert!(p.analysis_time.is_some());
        assert!(s.analysis_time.is_none());
    }
}
