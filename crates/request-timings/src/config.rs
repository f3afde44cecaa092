// File: crates/request-timings/src/config.rs
// Summary: Command-line and environment configuration for the chart service.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use chart_core::{theme, Theme, DEFAULT_SMA_PERIOD};
use clap::Parser;

use crate::timings::ChartConfig;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Parser, Debug, Clone)]
#[command(name = "request-timings", version, about = "Serve a request-latency chart rendered from a CSV log")]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "REQUEST_TIMINGS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "REQUEST_TIMINGS_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Measurement log, re-read on every request
    #[arg(short, long, env = "REQUEST_TIMINGS_DATA", default_value = "requests.csv")]
    pub data: PathBuf,

    /// Moving-average window; 0 selects the default
    #[arg(long, env = "REQUEST_TIMINGS_SMA_PERIOD", default_value_t = DEFAULT_SMA_PERIOD)]
    pub sma_period: usize,

    /// Color theme (light, dark)
    #[arg(long, env = "REQUEST_TIMINGS_THEME", default_value = "light")]
    pub theme: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn chart(&self) -> ChartConfig {
        ChartConfig::new(&self.data).with_sma_period(self.sma_period)
    }

    /// Unknown names fall back to the light theme.
    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
