//! Input URL list: a CSV with `URL_ID` and `URL` columns.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Read the URL list, skipping rows with a blank identifier or URL.
pub fn read_url_list(path: &Path) -> Result<Vec<UrlEntry>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open URL list: {}", path.display()))?;
    parse_url_list(reader)
}

fn parse_url_list<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<UrlEntry>> {
    let mut entries = Vec::new();

    for (idx, row) in reader.deserialize::<UrlEntry>().enumerate() {
        let entry = row.with_context(|| format!("Failed to read row {}", idx + 1))?;
        if entry.url_id.is_empty() || entry.url.is_empty() {
            log::warn!("Skipping row {}: URL_ID and URL are both required", idx + 1);
            continue;
        }
        entries.push(entry);
    }

    Ok(entries)
}
