//! Text preprocessing: tokens, sentence segments and syllable estimates.

pub mod syllables;
pub mod tokenizer;

pub use syllables::{count_syllables, count_syllables_first_char, SyllableStrategy};
pub use tokenizer::{
    count_personal_pronouns, filter_stopwords, segment_sentences, tokenize, Segmentation,
};
