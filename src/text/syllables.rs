//! Heuristic syllable estimation.
//!
//! The default strategy counts maximal runs of the vowels `a e i o u`,
//! subtracts one for a trailing `e`, and never returns less than 1.
//!
//! [`SyllableStrategy::FirstChar`] reproduces the output of the legacy scorer,
//! which stopped after inspecting the first character. Its estimate is 1 for
//! every word, so no word is ever complex under it. Use it only when results
//! must match reports produced by that scorer.

use serde::{Deserialize, Serialize};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyllableStrategy {
    /// Full-word vowel-run count with silent-`e` correction
    #[default]
    VowelRuns,
    /// Legacy first-character scan
    FirstChar,
}

impl SyllableStrategy {
    pub fn count(self, word: &str) -> usize {
        match self {
            Self::VowelRuns => count_syllables(word),
            Self::FirstChar => count_syllables_first_char(word),
        }
    }
}

impl std::fmt::Display for SyllableStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VowelRuns => write!(f, "vowel-runs"),
            Self::FirstChar => write!(f, "first-char"),
        }
    }
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Vowel-run syllable estimate, floored at 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let (runs, _) = word.chars().fold((0usize, false), |(runs, prev_vowel), c| {
        let vowel = is_vowel(c);
        let runs = if vowel && !prev_vowel { runs + 1 } else { runs };
        (runs, vowel)
    });

    let adjusted = if word.ends_with('e') {
        runs.saturating_sub(1)
    } else {
        runs
    };
    adjusted.max(1)
}

/// Estimate computed from the first character only, floored at 1.
pub fn count_syllables_first_char(word: &str) -> usize {
    let word = word.to_lowercase();
    let count = match word.chars().next() {
        Some(c) if is_vowel(c) => 1usize,
        _ => 0,
    };
    let adjusted = if word.ends_with('e') {
        count.saturating_sub(1)
    } else {
        count
    };
    adjusted.max(1)
}
