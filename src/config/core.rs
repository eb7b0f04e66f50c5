use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::parallel::BatchAnalysisConfig;
use crate::lexicon::LexiconPaths;
use crate::metrics::ScoringSettings;

/// Root configuration structure for textmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TextmapConfig {
    /// Stopword and sentiment list locations
    #[serde(default)]
    pub lexicon: LexiconPaths,

    /// Where stored article texts live
    #[serde(default)]
    pub articles: ArticlesConfig,

    /// Scoring formula parameters
    #[serde(default)]
    pub analysis: ScoringSettings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch execution settings
    #[serde(default)]
    pub batch: BatchAnalysisConfig,
}

fn default_articles_dir() -> PathBuf {
    PathBuf::from("articles")
}

fn default_article_extension() -> String {
    "txt".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticlesConfig {
    #[serde(default = "default_articles_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_article_extension")]
    pub extension: String,

    /// CSV with `URL_ID`/`URL` columns; when set, its identifiers drive the batch
    #[serde(default)]
    pub url_list: Option<PathBuf>,
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            dir: default_articles_dir(),
            extension: default_article_extension(),
            url_list: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// One of `csv`, `json`, `terminal`
    #[serde(default)]
    pub default_format: Option<String>,

    /// Write results here instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
}
