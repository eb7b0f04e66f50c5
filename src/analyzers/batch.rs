//! Batch article scoring.
//!
//! Every discovered article yields exactly one result. An article whose text
//! cannot be read is scored as empty text and its error is kept alongside the
//! record, so one bad file never aborts the batch.
//!
//! Results come back in input order whether scoring ran sequentially or on
//! rayon's thread pool.
//!
//! # Example
//!
//! ```rust,ignore
//! use textmap::analyzers::batch::{analyze_articles, into_analysis_results};
//!
//! let results = analyze_articles(&entries, &analyzer, &config.batch);
//! let report = into_analysis_results(results);
//! ```

use crate::config::{BatchAnalysisConfig, ParallelConfig};
use crate::core::{AnalysisResults, Article, ArticleFailure, Error, MetricsRecord};
use crate::io::{read_to_string_lossy, ArticleEntry};
use crate::metrics::TextAnalyzer;
use crate::observability::{increment_processed, set_current_article, set_progress};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Outcome of scoring one article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleAnalysisResult {
    pub record: MetricsRecord,

    /// Why the text could not be read, if it could not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,

    /// Time taken to load and score this article (if timing was enabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_time: Option<Duration>,
}

impl ArticleAnalysisResult {
    pub fn new(record: MetricsRecord) -> Self {
        Self {
            record,
            read_error: None,
            analysis_time: None,
        }
    }

    pub fn is_read_failure(&self) -> bool {
        self.read_error.is_some()
    }
}

/// Load an article's stored text, replacing undecodable bytes.
pub fn load_article(entry: &ArticleEntry) -> Result<Article, Error> {
    read_to_string_lossy(&entry.path)
        .map(|text| Article::new(entry.url_id.clone(), text))
        .map_err(|e| {
            Error::article_read(
                entry.url_id.clone(),
                format!("{}: {}", entry.path.display(), e),
            )
        })
}

/// Score every entry without progress display.
pub fn analyze_articles(
    entries: &[ArticleEntry],
    analyzer: &TextAnalyzer<'_>,
    config: &BatchAnalysisConfig,
) -> Vec<ArticleAnalysisResult> {
    analyze_articles_with_progress(entries, analyzer, config, &ProgressBar::hidden())
}

/// Score every entry, advancing `progress` once per article.
pub fn analyze_articles_with_progress(
    entries: &[ArticleEntry],
    analyzer: &TextAnalyzer<'_>,
    config: &BatchAnalysisConfig,
    progress: &ProgressBar,
) -> Vec<ArticleAnalysisResult> {
    let batch_span = tracing::info_span!("score_articles", articles = entries.len());
    let _entered = batch_span.enter();
    set_progress(0, entries.len());

    // rayon workers enter the batch span too, so a crash report from any
    // thread names it
    let score = |entry: &ArticleEntry| {
        let _in_batch = batch_span.enter();
        let result = analyze_entry(entry, analyzer, config.collect_timing);
        increment_processed();
        progress.inc(1);
        result
    };

    let results = run_batch(entries, &config.parallelism, score);

    let failures = results.iter().filter(|r| r.is_read_failure()).count();
    if failures > 0 {
        log::warn!(
            "{} of {} articles could not be read and were scored as empty",
            failures,
            results.len()
        );
    }
    results
}

/// Apply `score` to each entry, sequentially or in parallel chunks, keeping order.
fn run_batch<F>(
    entries: &[ArticleEntry],
    config: &ParallelConfig,
    score: F,
) -> Vec<ArticleAnalysisResult>
where
    F: Fn(&ArticleEntry) -> ArticleAnalysisResult + Sync,
{
    if !config.enabled || entries.len() <= 1 {
        return entries.iter().map(&score).collect();
    }

    let batch_size = config.effective_batch_size();
    if entries.len() <= batch_size {
        entries.par_iter().map(&score).collect()
    } else {
        // Chunked processing for large article sets
        entries
            .chunks(batch_size)
            .flat_map(|chunk| chunk.par_iter().map(&score).collect::<Vec<_>>())
            .collect()
    }
}

/// Load and score one article, substituting empty text on read failure.
fn analyze_entry(
    entry: &ArticleEntry,
    analyzer: &TextAnalyzer<'_>,
    collect_timing: bool,
) -> ArticleAnalysisResult {
    let _article = set_current_article(entry.url_id.as_str());
    let start = collect_timing.then(Instant::now);

    let (article, read_error) = match load_article(entry) {
        Ok(article) => (article, None),
        Err(e) => {
            log::warn!("{}; scoring as empty text", e);
            (Article::empty(entry.url_id.clone()), Some(e.to_string()))
        }
    };

    let record = analyzer.analyze_article(&article);
    log::debug!(
        "Scored {}: {} words, fog index {:.3}",
        record.url_id,
        record.word_count,
        record.fog_index
    );

    ArticleAnalysisResult {
        record,
        read_error,
        analysis_time: start.map(|s| s.elapsed()),
    }
}

/// Collect per-article results into the output table.
pub fn into_analysis_results(results: Vec<ArticleAnalysisResult>) -> AnalysisResults {
    let mut records = Vec::with_capacity(results.len());
    let mut failures = Vec::new();

    for result in results {
        if let Some(message) = result.read_error {
            failures.push(ArticleFailure {
                url_id: result.record.url_id.clone(),
                message,
            });
        }
        records.push(result.record);
    }

    AnalysisResults::new(records, failures)
}
