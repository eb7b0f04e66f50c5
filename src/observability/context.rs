//! Thread-local context tracking for crash reports.
//!
//! Records the current phase and the article being scored. Uses thread-local
//! storage (works with rayon parallel iterators) and atomic counters for
//! global progress. Context guards restore the previous state on drop, and
//! phase guards also hold the phase's tracing span open.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::span::EnteredSpan;

static ARTICLES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static ARTICLES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// Snapshot of what textmap was doing on this thread.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    /// `URL_ID` of the article being scored
    pub current_article: Option<String>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_article: None,
        }
    }
}

/// Major stages of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Loading stopword and sentiment lists
    LexiconLoading,
    /// Enumerating stored articles
    ArticleDiscovery,
    /// Computing per-article metrics
    Scoring,
    /// Writing the output table
    OutputGeneration,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LexiconLoading => write!(f, "lexicon_loading"),
            Self::ArticleDiscovery => write!(f, "article_discovery"),
            Self::Scoring => write!(f, "scoring"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

impl AnalysisPhase {
    fn span(self) -> tracing::Span {
        match self {
            Self::LexiconLoading => tracing::info_span!("lexicon_loading"),
            Self::ArticleDiscovery => tracing::info_span!("article_discovery"),
            Self::Scoring => tracing::info_span!("scoring"),
            Self::OutputGeneration => tracing::info_span!("output_generation"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: AnalysisContext,
    _span: Option<EnteredSpan>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current phase and enter its span; both end when the guard drops.
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard {
            previous,
            _span: Some(phase.span().entered()),
        }
    })
}

/// Set the article being scored; restored when the guard drops.
#[must_use]
pub fn set_current_article(url_id: impl Into<String>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_article = Some(url_id.into());
        ContextGuard {
            previous,
            _span: None,
        }
    })
}

pub fn set_progress(processed: usize, total: usize) {
    ARTICLES_PROCESSED.store(processed, Ordering::Relaxed);
    ARTICLES_TOTAL.store(total, Ordering::Relaxed);
}

/// Thread-safe; called from parallel iterators.
pub fn increment_processed() {
    ARTICLES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// (processed, total)
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        ARTICLES_PROCESSED.load(Ordering::Relaxed),
        ARTICLES_TOTAL.load(Ordering::Relaxed),
    )
}
