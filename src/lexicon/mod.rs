//! Word-category sets used for scoring.
//!
//! Three lexicons drive every metric: stopwords (removed before scoring),
//! positive words and negative words. They are loaded once at startup into a
//! [`Lexicons`] value and shared read-only across scoring threads.
//!
//! # Line rules
//!
//! A line contributes a word unless it is blank or begins with the list's
//! comment prefix (`|` for stopword files, `;` for sentiment lists). Included
//! lines are trimmed and lowercased.

mod loader;

pub use loader::{load_lexicons, load_stopwords_dir, load_word_list, LexiconPaths};

use std::collections::HashSet;

/// Comment prefix used by stopword files.
pub const STOPWORD_COMMENT_PREFIX: char = '|';

/// Comment prefix used by the positive/negative sentiment lists.
pub const SENTIMENT_COMMENT_PREFIX: char = ';';

/// An immutable set of case-normalized words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from raw list lines.
    pub fn from_lines<'a, I>(lines: I, comment_prefix: char) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = lines
            .into_iter()
            .filter_map(|line| normalize_line(line, comment_prefix))
            .collect();
        Self { words }
    }

    /// Build a lexicon from words that are already one per item.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Case-insensitive exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub(crate) fn merge(&mut self, other: Lexicon) {
        self.words.extend(other.words);
    }
}

/// Apply the inclusion rule to one list line.
fn normalize_line(line: &str, comment_prefix: char) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || line.starts_with(comment_prefix) {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// The three lexicons every analysis needs.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub stopwords: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl Lexicons {
    pub fn new(stopwords: Lexicon, positive: Lexicon, negative: Lexicon) -> Self {
        Self {
            stopwords,
            positive,
            negative,
        }
    }
}
