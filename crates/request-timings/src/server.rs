// File: crates/request-timings/src/server.rs
// Summary: HTTP surface. GET / re-reads the log and answers with a freshly rendered PNG.
// Notes:
// - Each request owns its series, overlays and chart; nothing is shared but read-only config.
// - Rendering is CPU-bound and runs on the blocking pool.
// - A failed render is logged and answered with an empty image/png body (status 200).

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chart_core::{RenderError, Renderer};
use chart_render_skia::SkiaRenderer;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::timings::ChartConfig;

pub struct AppState {
    pub chart: ChartConfig,
    pub renderer: Arc<dyn Renderer + Send + Sync>,
}

impl AppState {
    pub fn new(chart: ChartConfig, renderer: Arc<dyn Renderer + Send + Sync>) -> Self {
        Self { chart, renderer }
    }

    pub fn from_config(config: &Config) -> Self {
        let renderer = SkiaRenderer::new().with_theme(config.theme());
        Self::new(config.chart(), Arc::new(renderer))
    }

    pub fn render(&self) -> Result<Vec<u8>, RenderError> {
        self.chart.render(self.renderer.as_ref())
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(draw_chart)).with_state(state)
}

async fn draw_chart(State(state): State<Arc<AppState>>) -> Response {
    let started = Instant::now();
    let content_type = state.renderer.content_type();
    let job = Arc::clone(&state);
    let body = match tokio::task::spawn_blocking(move || job.render()).await {
        Ok(Ok(bytes)) => {
            debug!(bytes = bytes.len(), elapsed_ms = started.elapsed().as_millis() as u64, "chart rendered");
            bytes
        }
        Ok(Err(err)) => {
            error!(error = %err, "chart render failed");
            Vec::new()
        }
        Err(err) => {
            error!(error = %err, "chart render task aborted");
            Vec::new()
        }
    };
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let state = Arc::new(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(data = %config.data.display(), theme = %config.theme, "listening on {addr}");
    axum::serve(listener, router(state)).await.context("server error")?;
    Ok(())
}
