use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A stored article: its `URL_ID` and where its text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEntry {
    pub url_id: String,
    pub path: PathBuf,
}

impl ArticleEntry {
    pub fn new(url_id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            url_id: url_id.into(),
            path: path.into(),
        }
    }
}

pub struct ArticleWalker {
    root: PathBuf,
    extension: String,
}

impl ArticleWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "txt".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Article files directly under the root, sorted by file name.
    pub fn walk(&self) -> Result<Vec<ArticleEntry>> {
        let mut articles = Vec::new();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry
                .with_context(|| format!("Failed to list {}", self.root.display()))?;
            let path = entry.path();

            if entry.file_type().is_file() && self.should_process(path) {
                if let Some(url_id) = path.file_stem() {
                    articles.push(ArticleEntry::new(
                        url_id.to_string_lossy(),
                        path.to_path_buf(),
                    ));
                }
            }
        }

        Ok(articles)
    }

    /// Entries for explicit identifiers, whether or not their files exist.
    pub fn entries_for_ids<I, S>(&self, ids: I) -> Vec<ArticleEntry>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter()
            .map(|id| {
                let id = id.into();
                let path = self.root.join(format!("{}.{}", id, self.extension));
                ArticleEntry::new(id, path)
            })
            .collect()
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}

pub fn find_articles(root: &Path, extension: &str) -> Result<Vec<ArticleEntry>> {
    ArticleWalker::new(root.to_path_buf())
        .with_extension(extension)
        .walk()
}
