// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod fetch;
pub mod io;
pub mod lexicon;
pub mod metrics;
pub mod observability;
pub mod progress;
pub mod text;

// Re-export commonly used types
pub use crate::core::{AnalysisResults, Article, ArticleFailure, Error, MetricsRecord, Result};

pub use crate::lexicon::{load_lexicons, Lexicon, LexiconPaths, Lexicons};

pub use crate::metrics::{fog_index, polarity, subjectivity, ScoringSettings, TextAnalyzer};

pub use crate::text::{
    count_personal_pronouns, count_syllables, filter_stopwords, segment_sentences, tokenize,
    Segmentation, SyllableStrategy,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::analyzers::{analyze_articles, into_analysis_results, ArticleAnalysisResult};

pub use crate::config::{BatchAnalysisConfig, ParallelConfig, TextmapConfig};

pub use crate::fetch::{collect_articles, FallbackExtractor, PageExtractor};
