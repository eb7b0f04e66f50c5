pub mod input;
pub mod output;
pub mod walker;

pub use input::{read_url_list, UrlEntry};
pub use output::{create_writer, OutputFormat, OutputWriter, OUTPUT_COLUMNS};
pub use walker::{find_articles, ArticleEntry, ArticleWalker};

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a file, replacing invalid UTF-8 sequences instead of failing.
pub fn read_to_string_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("Replacing invalid UTF-8 in {}", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Store article text as `<dir>/<url_id>.txt`, creating `dir` if needed.
pub fn write_article(dir: &Path, url_id: &str, text: &str) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("{}.txt", url_id));
    write_file(&path, text)?;
    Ok(path)
}
