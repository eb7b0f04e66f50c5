use super::{Lexicon, Lexicons, SENTIMENT_COMMENT_PREFIX, STOPWORD_COMMENT_PREFIX};
use crate::core::{Error, Result};
use crate::io::read_to_string_lossy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn default_stopwords_dir() -> PathBuf {
    PathBuf::from("StopWords")
}

fn default_positive_words() -> PathBuf {
    PathBuf::from("MasterDictionary/positive-words.txt")
}

fn default_negative_words() -> PathBuf {
    PathBuf::from("MasterDictionary/negative-words.txt")
}

fn default_stopword_extension() -> String {
    "txt".to_string()
}

/// Locations of the lexicon inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexiconPaths {
    /// Directory holding one or more stopword files
    #[serde(default = "default_stopwords_dir")]
    pub stopwords_dir: PathBuf,

    #[serde(default = "default_positive_words")]
    pub positive_words: PathBuf,

    #[serde(default = "default_negative_words")]
    pub negative_words: PathBuf,

    /// Only files with this extension are read from `stopwords_dir`
    #[serde(default = "default_stopword_extension")]
    pub stopword_extension: String,
}

impl Default for LexiconPaths {
    fn default() -> Self {
        Self {
            stopwords_dir: default_stopwords_dir(),
            positive_words: default_positive_words(),
            negative_words: default_negative_words(),
            stopword_extension: default_stopword_extension(),
        }
    }
}

/// Load all three lexicons. Any missing input is a configuration error.
pub fn load_lexicons(paths: &LexiconPaths) -> Result<Lexicons> {
    let stopwords = load_stopwords_dir(&paths.stopwords_dir, &paths.stopword_extension)?;
    let positive = load_word_list(&paths.positive_words)?;
    let negative = load_word_list(&paths.negative_words)?;

    log::info!(
        "Loaded lexicons: {} stopwords, {} positive, {} negative",
        stopwords.len(),
        positive.len(),
        negative.len()
    );

    Ok(Lexicons::new(stopwords, positive, negative))
}

/// Union every stopword file in `dir` with the given extension.
pub fn load_stopwords_dir(dir: &Path, extension: &str) -> Result<Lexicon> {
    if !dir.is_dir() {
        return Err(Error::configuration(
            format!("stopwords directory not found: {}", dir.display()),
            dir,
        ));
    }

    let mut stopwords = Lexicon::default();
    let mut file_count = 0usize;

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            Error::configuration(format!("failed to list stopwords directory: {}", e), dir)
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, extension) {
            continue;
        }

        let contents = read_list(path)?;
        stopwords.merge(Lexicon::from_lines(
            contents.lines(),
            STOPWORD_COMMENT_PREFIX,
        ));
        file_count += 1;
        log::debug!("Read stopword file {}", path.display());
    }

    if file_count == 0 {
        log::warn!(
            "No .{} stopword files found in {}; no words will be filtered",
            extension,
            dir.display()
        );
    }

    Ok(stopwords)
}

/// Load a `;`-commented sentiment word list.
pub fn load_word_list(path: &Path) -> Result<Lexicon> {
    if !path.is_file() {
        return Err(Error::configuration(
            format!("word list not found: {}", path.display()),
            path,
        ));
    }
    let contents = read_list(path)?;
    Ok(Lexicon::from_lines(
        contents.lines(),
        SENTIMENT_COMMENT_PREFIX,
    ))
}

fn read_list(path: &Path) -> Result<String> {
    read_to_string_lossy(path).map_err(|e| {
        Error::configuration(format!("failed to read {}: {}", path.display(), e), path)
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
