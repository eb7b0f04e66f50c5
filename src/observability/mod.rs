//! Observability infrastructure for crash reports and debugging.
//!
//! - **Panic Hook**: structured crash report with the current context
//! - **Context Tracking**: thread-local phase and article tracking
//! - **Spans**: tracing subscriber that keeps phase spans live
//! - **Progress Tracking**: atomic counters for batch progress
//!
//! ```ignore
//! use textmap::observability::{set_phase, set_current_article, AnalysisPhase};
//!
//! let _phase = set_phase(AnalysisPhase::Scoring);
//! for article in &articles {
//!     let _guard = set_current_article(&article.url_id);
//!     analyzer.analyze_article(article);
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod spans;

pub use context::{
    get_current_context, get_progress, increment_processed, set_current_article, set_phase,
    set_progress, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
pub use spans::{build_subscriber, init_tracing};
