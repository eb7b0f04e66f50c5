//! Readability and sentiment scoring.
//!
//! [`TextAnalyzer`] turns one article's raw text into a [`MetricsRecord`].
//! All per-article metrics operate on the stopword-filtered words except the
//! personal pronoun count, which is a separate pass over the raw text.
//!
//! # Formulas
//!
//! - polarity = (pos - neg) / (pos + neg + ε)
//! - subjectivity = (pos + neg) / (words + ε), capped at 1
//! - avg sentence length = words / max(segments, 1)
//! - complex share = complex / words (0 when there are no words)
//! - fog index = 0.4 × (avg sentence length + complex share)
//! - syllables per word = Σ syllables / max(words, 1)
//! - avg word length = Σ chars / max(words, 1)

use crate::core::{Article, MetricsRecord};
use crate::lexicon::Lexicons;
use crate::text::{
    count_personal_pronouns, filter_stopwords, segment_sentences, tokenize, SyllableStrategy,
};
use serde::{Deserialize, Serialize};

/// Guard added to sentiment denominators.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Minimum syllable estimate for a word to count as complex.
pub const DEFAULT_COMPLEX_WORD_SYLLABLES: usize = 3;

const FOG_WEIGHT: f64 = 0.4;

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

fn default_complex_word_syllables() -> usize {
    DEFAULT_COMPLEX_WORD_SYLLABLES
}

/// Tunable parameters of the scoring formulas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringSettings {
    #[serde(default)]
    pub syllables: SyllableStrategy,

    #[serde(default = "default_complex_word_syllables")]
    pub complex_word_syllables: usize,

    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            syllables: SyllableStrategy::default(),
            complex_word_syllables: default_complex_word_syllables(),
            epsilon: default_epsilon(),
        }
    }
}

/// Scores articles against a shared, read-only set of lexicons.
#[derive(Debug, Clone, Copy)]
pub struct TextAnalyzer<'a> {
    lexicons: &'a Lexicons,
    settings: ScoringSettings,
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(lexicons: &'a Lexicons, settings: ScoringSettings) -> Self {
        Self { lexicons, settings }
    }

    pub fn analyze_article(&self, article: &Article) -> MetricsRecord {
        self.analyze(&article.url_id, &article.text)
    }

    /// Tokenize, segment, filter and score raw text.
    pub fn analyze(&self, url_id: &str, text: &str) -> MetricsRecord {
        let filtered = filter_stopwords(tokenize(text), &self.lexicons.stopwords);
        let segmentation = segment_sentences(text);
        self.score(url_id, &filtered, text, segmentation.denominator())
    }

    /// Build the record from already-filtered words.
    ///
    /// `raw_text` is only used for pronoun counting. `sentence_count` is the
    /// segment count of the raw text and is floored at 1 here.
    pub fn score(
        &self,
        url_id: &str,
        filtered_words: &[String],
        raw_text: &str,
        sentence_count: usize,
    ) -> MetricsRecord {
        let eps = self.settings.epsilon;
        let word_count = filtered_words.len();

        let positive_score = count_in(filtered_words, |w| self.lexicons.positive.contains(w));
        let negative_score = count_in(filtered_words, |w| self.lexicons.negative.contains(w));

        let syllable_counts: Vec<usize> = filtered_words
            .iter()
            .map(|w| self.settings.syllables.count(w))
            .collect();
        let complex_word_count = syllable_counts
            .iter()
            .filter(|&&s| s >= self.settings.complex_word_syllables)
            .count();

        let avg_sentence_length = ratio(word_count, sentence_count.max(1));
        let percentage_complex_words = ratio(complex_word_count, word_count);
        let char_total: usize = filtered_words.iter().map(|w| w.chars().count()).sum();

        MetricsRecord {
            url_id: url_id.to_string(),
            positive_score,
            negative_score,
            polarity_score: polarity(positive_score, negative_score, eps),
            subjectivity_score: subjectivity(positive_score, negative_score, word_count, eps),
            avg_sentence_length,
            percentage_complex_words,
            fog_index: fog_index(avg_sentence_length, percentage_complex_words),
            complex_word_count,
            word_count,
            syllables_per_word: ratio(syllable_counts.iter().sum(), word_count.max(1)),
            personal_pronouns: count_personal_pronouns(raw_text),
            avg_word_length: ratio(char_total, word_count.max(1)),
        }
    }
}

fn count_in(words: &[String], pred: impl Fn(&str) -> bool) -> usize {
    words.iter().filter(|w| pred(w)).count()
}

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Sentiment direction in [-1, 1].
pub fn polarity(positive: usize, negative: usize, epsilon: f64) -> f64 {
    let (p, n) = (positive as f64, negative as f64);
    (p - n) / (p + n + epsilon)
}

/// Share of sentiment-bearing words in [0, 1].
///
/// A word listed in both sentiment lexicons counts toward both scores, so the
/// raw ratio can exceed 1; it is capped.
pub fn subjectivity(positive: usize, negative: usize, word_count: usize, epsilon: f64) -> f64 {
    let raw = (positive + negative) as f64 / (word_count as f64 + epsilon);
    raw.min(1.0)
}

pub fn fog_index(avg_sentence_length: f64, percentage_complex_words: f64) -> f64 {
    FOG_WEIGHT * (avg_sentence_length + percentage_complex_words)
}
