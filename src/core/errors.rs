//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for textmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unreadable lexicon inputs. Fatal: aborts the run.
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// A single article could not be loaded or decoded.
    ///
    /// The batch runner recovers from this locally by scoring empty text.
    #[error("Failed to read article '{url_id}': {message}")]
    ArticleRead { url_id: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error with path context
    pub fn configuration(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create an article read error
    pub fn article_read(url_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ArticleRead {
            url_id: url_id.into(),
            message: message.into(),
        }
    }

    /// Whether the error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::ArticleRead { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
