//! Rule-based word tokenization and sentence segmentation.

use crate::lexicon::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

static PRONOUN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:I|we|my|ours|us)\b").expect("pronoun pattern is valid")
});

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Lowercase word tokens: maximal runs of alphanumeric/underscore characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Drop every token present in the stopword set.
pub fn filter_stopwords(tokens: Vec<String>, stopwords: &Lexicon) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !stopwords.contains(token))
        .collect()
}

/// Result of splitting raw text on sentence terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmentation {
    /// Pieces produced by splitting on `.`, `!` and `?`, empty ones included.
    pub segments: usize,
    /// Pieces containing something other than whitespace. Informational
    /// only: no metric reads it, and per-sentence averages divide by
    /// `segments` instead.
    pub sentences: usize,
}

impl Segmentation {
    /// Denominator for per-sentence averages, never zero.
    pub fn denominator(&self) -> usize {
        self.segments.max(1)
    }
}

/// Split raw (unfiltered, original-case) text into sentence segments.
pub fn segment_sentences(text: &str) -> Segmentation {
    let (segments, sentences) = text
        .split(SENTENCE_TERMINATORS)
        .fold((0, 0), |(segments, sentences), piece| {
            let non_empty = usize::from(!piece.trim().is_empty());
            (segments + 1, sentences + non_empty)
        });
    Segmentation {
        segments,
        sentences,
    }
}

/// Whole-word, case-insensitive matches of I/we/my/ours/us in raw text.
pub fn count_personal_pronouns(text: &str) -> usize {
    PRONOUN_PATTERN.find_iter(text).count()
}
