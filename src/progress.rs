//! Progress feedback for batch scoring using `indicatif`.
//!
//! - **Quiet Mode**: no progress output (`TEXTMAP_QUIET` env var or `--quiet`)
//! - **Non-TTY**: bars are hidden in CI and piped output
//!
//! # Examples
//!
//! ```rust,no_run
//! use textmap::progress::{ProgressConfig, ProgressManager, TEMPLATE_ARTICLE_SCORING};
//!
//! let manager = ProgressManager::new(ProgressConfig::from_env(false));
//! let progress = manager.create_bar(100, TEMPLATE_ARTICLE_SCORING);
//! progress.set_message("Scoring articles");
//! for _ in 0..100 {
//!     progress.inc(1);
//! }
//! progress.finish_with_message("Scoring complete");
//! ```

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;

pub const TEMPLATE_ARTICLE_SCORING: &str =
    "📄 {msg} {pos}/{len} articles ({percent}%) - {per_sec}/sec - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("TEXTMAP_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    /// Determine if progress bars should be displayed
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }
}

/// Coordinates the progress bars of one run
#[derive(Clone)]
pub struct ProgressManager {
    multi: Arc<MultiProgress>,
    config: ProgressConfig,
}

impl ProgressManager {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            multi: Arc::new(MultiProgress::new()),
            config,
        }
    }

    /// Create a progress bar with the given length and template
    ///
    /// Returns a hidden progress bar if progress should not be shown
    pub fn create_bar(&self, len: u64, template: &str) -> ProgressBar {
        if !self.config.should_show_progress() {
            return ProgressBar::hidden();
        }

        let style = match ProgressStyle::default_bar().template(template) {
            Ok(style) => style.progress_chars("█▓▒░  "),
            Err(e) => {
                log::debug!("Invalid progress template '{}': {}", template, e);
                ProgressStyle::default_bar()
            }
        };

        let pb = self.multi.add(ProgressBar::new(len));
        pb.set_style(style);
        pb
    }

    /// Clear all progress bars before printing final output
    pub fn clear(&self) -> std::io::Result<()> {
        self.multi.clear()
    }
}
