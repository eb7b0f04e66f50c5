mod core;
mod loader;
mod parallel;

// Re-export core types
pub use core::{ArticlesConfig, OutputConfig, TextmapConfig};

// Re-export parallel config types
pub use parallel::{BatchAnalysisConfig, ParallelConfig};

// Re-export loader functions
pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

/// Default contents written by `textmap init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Textmap Configuration

[lexicon]
stopwords_dir = "StopWords"
positive_words = "MasterDictionary/positive-words.txt"
negative_words = "MasterDictionary/negative-words.txt"

[articles]
dir = "articles"
extension = "txt"
# url_list = "Input.csv"

[analysis]
# "vowel-runs" or "first-char" (reproduces legacy reports)
syllables = "vowel-runs"
complex_word_syllables = 3

[output]
default_format = "csv"
path = "output.csv"

[batch]
collect_timing = false

[batch.parallelism]
enabled = true
"#;
