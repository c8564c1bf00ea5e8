//! Span tracing for the move validation and replay entry points.
//!
//! Enable with `--features instrumentation`. Spans are printed when they
//! close, so every event carries the time spent inside it.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Respects the RUST_LOG environment variable; when it is unset only spans
/// from this crate are shown.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chess_rules=trace"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .compact()
        .try_init();

    if let Err(error) = result {
        log::warn!("failed to set tracing subscriber: {}", error);
    }
}
