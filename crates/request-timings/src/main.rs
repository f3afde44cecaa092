// File: crates/request-timings/src/main.rs
// Summary: Binary entry point for the request-timings chart service.

use clap::Parser;
use request_timings::{logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();
    let config = Config::parse();
    request_timings::serve(config).await
}
