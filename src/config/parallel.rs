//! How a batch of articles is spread over rayon's thread pool.
//!
//! ```toml
//! [batch]
//! collect_timing = false
//!
//! [batch.parallelism]
//! enabled = true
//! max_concurrency = 4   # omit to use every core
//! batch_size = 100
//! ```

use serde::{Deserialize, Serialize};

/// Articles scored per parallel chunk when no size is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Thread and chunking limits for batch scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParallelConfig {
    /// Score articles concurrently; `false` scores them one after another
    pub enabled: bool,

    /// Worker threads for the scoring pool; `None` means one per core
    pub max_concurrency: Option<usize>,

    /// Articles loaded and scored per chunk, bounding how many texts are
    /// held in memory at once
    pub batch_size: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_concurrency: None,
            batch_size: Some(DEFAULT_CHUNK_SIZE),
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Thread count for the scoring pool. A configured value of zero falls
    /// back to the core count like an absent one.
    pub fn effective_concurrency(&self) -> usize {
        match self.max_concurrency {
            Some(threads) if threads > 0 => threads,
            _ => available_cores(),
        }
    }

    /// Chunk size used by the batch scorer; never zero.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.unwrap_or(DEFAULT_CHUNK_SIZE).max(1)
    }
}

fn available_cores() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1)
}

/// The `[batch]` section of `.textmap.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BatchAnalysisConfig {
    pub parallelism: ParallelConfig,

    /// Record per-article scoring time in the results
    pub collect_timing: bool,
}

impl BatchAnalysisConfig {
    pub fn with_timing(mut self) -> Self {
        self.collect_timing = true;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallelism = ParallelConfig::sequential();
        self
    }
}
