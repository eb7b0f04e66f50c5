//! Crash report printed in place of the default panic message.
//!
//! The report names the phase, the tracing span and the article being scored
//! on the panicking thread, plus how far the batch got. A backtrace follows
//! when `RUST_BACKTRACE` is set.

use super::context::{get_current_context, get_progress, AnalysisContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const INNER_WIDTH: usize = 78;
const RULE: &str = "══════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let report = CrashReport::capture(panic_message(info), panic_location(info));
        eprintln!();
        eprintln!("{}", report.render());
        if let Some(article) = &report.context.current_article {
            eprintln!();
            eprintln!("Include this crash report and the text of article: {}", article);
        }
    }));
}

/// State of the panicking thread at the moment of the panic.
#[derive(Debug, Clone)]
struct CrashReport {
    message: String,
    location: Option<String>,
    context: AnalysisContext,
    span: Option<&'static str>,
    processed: usize,
    total: usize,
}

impl CrashReport {
    fn capture(message: String, location: Option<String>) -> Self {
        let (processed, total) = get_progress();
        Self {
            message,
            location,
            context: get_current_context(),
            span: Span::current().metadata().map(|m| m.name()),
            processed,
            total,
        }
    }

    /// Lines of the OPERATION CONTEXT section.
    fn context_lines(&self) -> Vec<String> {
        let mut lines = vec![match self.context.phase {
            Some(phase) => format!("  Phase: {}", phase),
            None => "  Phase: (not set - crash occurred before analysis started)".to_string(),
        }];
        if let Some(span) = self.span {
            lines.push(format!("  Span: {}", span));
        }
        if let Some(article) = &self.context.current_article {
            lines.push(format!("  Article: {}", article));
        }
        if self.total > 0 {
            let pct = self.processed * 100 / self.total;
            lines.push(format!(
                "  Progress: {} / {} articles ({}%)",
                self.processed, self.total, pct
            ));
        }
        lines
    }

    fn render(&self) -> String {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let mut out = vec![
            format!("╔{RULE}╗"),
            boxed("                         TEXTMAP CRASH REPORT"),
            format!("╠{RULE}╣"),
            boxed(&format!("Version: {}", VERSION)),
            boxed(&format!("Platform: {}", std::env::consts::OS)),
            boxed(&format!("Time: {}", timestamp)),
            format!("╠{RULE}╣"),
            boxed(&format!("PANIC: {}", self.message)),
        ];
        if let Some(location) = &self.location {
            out.push(boxed(&format!("Location: {}", location)));
        }

        out.push(format!("╠{RULE}╣"));
        out.push(boxed("OPERATION CONTEXT:"));
        out.extend(self.context_lines().iter().map(|line| boxed(line)));
        out.push(format!("╠{RULE}╣"));

        if std::env::var("RUST_BACKTRACE").is_ok() {
            out.push(boxed("STACK TRACE:"));
            out.push(format!("╚{RULE}╝"));
            out.push(String::new());
            out.push(std::backtrace::Backtrace::capture().to_string());
        } else {
            out.push(boxed("Run with RUST_BACKTRACE=1 for stack trace"));
            out.push(format!("╚{RULE}╝"));
        }
        out.join("\n")
    }
}

/// One row of the report frame, padded or truncated to the frame width.
fn boxed(text: &str) -> String {
    let width = INNER_WIDTH - 3;
    format!("║  {:<width$} ║", truncate(text, width), width = width)
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn panic_location(info: &PanicHookInfo<'_>) -> Option<String> {
    info.location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
