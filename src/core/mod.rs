pub mod errors;

pub use errors::{Error, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw article text keyed by its `URL_ID`.
///
/// Text is empty when extraction failed or the stored file was unreadable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub url_id: String,
    pub text: String,
}

impl Article {
    pub fn new(url_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url_id: url_id.into(),
            text: text.into(),
        }
    }

    pub fn empty(url_id: impl Into<String>) -> Self {
        Self::new(url_id, String::new())
    }
}

/// Readability and sentiment metrics for one article.
///
/// Every field is defined for empty articles; rate-based values fall back to 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub url_id: String,
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    /// Filtered words per sentence segment.
    pub avg_sentence_length: f64,
    /// Fraction (0..=1) of filtered words that are complex.
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub complex_word_count: usize,
    /// Number of words left after stopword removal.
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

impl MetricsRecord {
    /// All-zero record for an article with no usable text.
    pub fn empty(url_id: impl Into<String>) -> Self {
        Self {
            url_id: url_id.into(),
            ..Default::default()
        }
    }

    /// Same value as `avg_sentence_length`; the tabular output carries both columns.
    pub fn avg_words_per_sentence(&self) -> f64 {
        self.avg_sentence_length
    }
}

/// An article whose text could not be loaded and was scored as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFailure {
    pub url_id: String,
    pub message: String,
}

/// Output of one batch run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<MetricsRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ArticleFailure>,
}

impl AnalysisResults {
    pub fn new(records: Vec<MetricsRecord>, failures: Vec<ArticleFailure>) -> Self {
        Self {
            generated_at: Utc::now(),
            records,
            failures,
        }
    }

    pub fn article_count(&self) -> usize {
        self.records.len()
    }
}
