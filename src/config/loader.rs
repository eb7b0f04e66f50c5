use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::TextmapConfig;
use crate::core::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".textmap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<TextmapConfig, String> {
    let config = toml::from_str::<TextmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    let epsilon = config.analysis.epsilon;
    if epsilon.is_nan() || epsilon <= 0.0 {
        return Err("analysis.epsilon must be positive".to_string());
    }
    if config.analysis.complex_word_syllables == 0 {
        return Err("analysis.complex_word_syllables must be at least 1".to_string());
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TextmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load `.textmap.toml` from the working directory or its nearest ancestor.
///
/// Falls back to defaults when no readable, valid file is found.
pub fn load_config() -> TextmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return TextmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TextmapConfig::default()
        })
}

/// Load an explicitly requested config file. Unlike discovery, failures are errors.
pub fn load_config_from_path(path: &Path) -> Result<TextmapConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration(format!("failed to read {}: {}", path.display(), e), path)
    })?;
    parse_and_validate_config(&contents).map_err(|message| Error::configuration(message, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::SyllableStrategy;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [lexicon]
            stopwords_dir = "lists/stop"

            [articles]
            dir = "out/articles"
            url_list = "Input.csv"

            [analysis]
            syllables = "first-char"

            [batch]
            collect_timing = true

            [batch.parallelism]
            enabled = false
        "#})
        .unwrap();

        assert_eq!(config.lexicon.stopwords_dir, PathBuf::from("lists/stop"));
        assert_eq!(
            config.lexicon.positive_words,
            PathBuf::from("MasterDictionary/positive-words.txt")
        );
        assert_eq!(config.articles.dir, PathBuf::from("out/articles"));
        assert_eq!(config.articles.url_list, Some(PathBuf::from("Input.csv")));
        assert_eq!(config.articles.extension, "txt");
        assert_eq!(config.analysis.syllables, SyllableStrategy::FirstChar);
        assert_eq!(config.analysis.complex_word_syllables, 3);
        assert!(config.batch.collect_timing);
        assert!(!config.batch.parallelism.enabled);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, TextmapConfig::default());
    }

    #[test]
    fn test_invalid_epsilon_rejected() {
        let err = parse_and_validate_config("[analysis]\nepsilon = 0.0\n").unwrap_err();
        assert!(err.contains("epsilon"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(parse_and_validate_config("[analysis\n").is_err());
    }

    #[test]
    fn test_directory_ancestors_limited() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_load_config_from_path_errors_are_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[analysis]\ncomplex_word_syllables = 0\n").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.is_fatal());
        assert!(load_config_from_path(&temp_dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_try_load_missing_file_returns_none() {
        assert!(try_load_config_from_path(Path::new("/nonexistent/.textmap.toml")).is_none());
    }
}
