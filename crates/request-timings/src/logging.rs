// File: crates/request-timings/src/logging.rs
// Summary: tracing subscriber setup; RUST_LOG overrides the default directives.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVES: &str = "request_timings=info,chart_core=info,chart_render_skia=info";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init();
}
