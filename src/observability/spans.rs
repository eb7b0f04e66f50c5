//! Tracing subscriber setup.
//!
//! Log records go through `env_logger`. The subscriber keeps the phase and
//! batch spans live so crash reports can name the active span, and at `-vv`
//! it prints each span's busy and idle time when the span closes.

use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Filter used when `TEXTMAP_TRACE` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "textmap=info";

pub fn build_subscriber(verbosity: u8) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_env("TEXTMAP_TRACE")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let span_events = if verbosity >= 2 {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(span_events)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
}

/// Install the subscriber process-wide. The `log` facade stays with
/// `env_logger`, so this must not go through `SubscriberInitExt::init`.
pub fn init_tracing(verbosity: u8) {
    if let Err(e) = tracing::subscriber::set_global_default(build_subscriber(verbosity)) {
        log::debug!("Tracing subscriber already installed: {}", e);
    }
}
