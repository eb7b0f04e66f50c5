//! Article collection seam.
//!
//! Page fetching and HTML extraction live outside this crate. They plug in
//! through [`PageExtractor`]; [`FallbackExtractor`] composes a fast extractor
//! with a slower one that can render scripted pages, trying the second only
//! when the first yields nothing.

use crate::io::{write_article, UrlEntry};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Turns a URL into article text, or `None` when nothing usable was found.
pub trait PageExtractor: Send + Sync {
    fn name(&self) -> &str;

    fn extract(&self, url: &str) -> Option<String>;
}

/// Try `primary`, then `secondary` when the primary returns no text.
pub struct FallbackExtractor<P, S> {
    primary: P,
    secondary: S,
}

impl<P: PageExtractor, S: PageExtractor> FallbackExtractor<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: PageExtractor, S: PageExtractor> PageExtractor for FallbackExtractor<P, S> {
    fn name(&self) -> &str {
        "fallback"
    }

    fn extract(&self, url: &str) -> Option<String> {
        match non_empty(self.primary.extract(url)) {
            Some(text) => Some(text),
            None => {
                log::info!(
                    "{} extractor found nothing for {}, trying {}",
                    self.primary.name(),
                    url,
                    self.secondary.name()
                );
                non_empty(self.secondary.extract(url))
            }
        }
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Join title and body and collapse whitespace runs to single spaces.
///
/// Returns `None` when the body is empty, matching the extractor contract
/// that a page without paragraph text counts as a failed extraction.
pub fn normalize_article_text(title: &str, body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    let joined = format!("{}\n\n{}", title, body);
    Some(WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string())
}

/// What happened to one URL during collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOutcome {
    pub url_id: String,
    /// Where the text was stored, if extraction succeeded
    pub saved_to: Option<PathBuf>,
}

impl CollectOutcome {
    pub fn is_saved(&self) -> bool {
        self.saved_to.is_some()
    }
}

/// Extract each URL and store non-empty text as `<store_dir>/<URL_ID>.txt`.
///
/// Failures are reported per entry; the batch scorer later turns missing
/// files into all-zero rows.
pub fn collect_articles(
    entries: &[UrlEntry],
    extractor: &dyn PageExtractor,
    store_dir: &Path,
) -> Vec<CollectOutcome> {
    entries
        .iter()
        .map(|entry| {
            log::info!("Processing {} -> {}", entry.url_id, entry.url);
            let saved_to = non_empty(extractor.extract(&entry.url)).and_then(|text| {
                write_article(store_dir, &entry.url_id, &text)
                    .map_err(|e| log::warn!("Failed to save {}: {}", entry.url_id, e))
                    .ok()
            });
            if saved_to.is_none() {
                log::warn!("Failed to extract {}", entry.url);
            }
            CollectOutcome {
                url_id: entry.url_id.clone(),
                saved_to,
            }
        })
        .collect()
}
