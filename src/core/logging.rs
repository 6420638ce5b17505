//! File-based Logging
//!
//! The TUI owns the terminal, so log output goes to a daily-rolling file
//! under the data directory instead of stdout. `RUST_LOG` controls the
//! filter; `log`-macro crates are bridged into tracing.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the global subscriber writing to `<log_dir>/designgenie.log`.
///
/// Returns the appender guard, which must stay alive for the lifetime of
/// the process, or `None` when logging could not be set up (the app still
/// runs, just silently).
pub fn init(log_dir: &Path) -> Option<WorkerGuard> {
    if fs::create_dir_all(log_dir).is_err() {
        return None;
    }

    // Route log-crate records (reqwest internals etc.) into tracing.
    let _ = LogTracer::init();

    let appender = tracing_appender::rolling::daily(log_dir, "designgenie.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(filter);

    // try_init: tests may initialize more than once.
    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        return None;
    }

    Some(guard)
}
