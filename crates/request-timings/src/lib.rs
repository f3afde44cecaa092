// File: crates/request-timings/src/lib.rs
// Summary: Request-latency chart service: configuration, logging, chart pipeline and HTTP router.

pub mod config;
pub mod logging;
pub mod server;
pub mod timings;

pub use config::Config;
pub use server::{router, serve, AppState};
pub use timings::ChartConfig;
