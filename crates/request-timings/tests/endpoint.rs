// File: crates/request-timings/tests/endpoint.rs
// Purpose: GET / end to end through the router: fresh PNG per request, failures stay 200/image/png.

use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chart_core::{ChartSpec, RenderError, Renderer, CONTENT_TYPE_PNG};
use chart_render_skia::SkiaRenderer;
use request_timings::{router, AppState, ChartConfig};
use tower::ServiceExt;

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("requests.csv")
}

fn app(data: impl Into<PathBuf>) -> Router {
    let state = AppState::new(ChartConfig::new(data), Arc::new(SkiaRenderer::new()));
    router(Arc::new(state))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
    (status, content_type, body)
}

#[tokio::test]
async fn root_serves_full_size_png() {
    let (status, content_type, body) = get(app(fixture()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(CONTENT_TYPE_PNG));
    assert!(body.starts_with(&PNG_MAGIC));
    let img = image::load_from_memory(&body).unwrap();
    assert_eq!((img.width(), img.height()), (1280, 720));
}

#[tokio::test]
async fn missing_data_file_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let (status, content_type, body) = get(app(dir.path().join("absent.csv")), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(CONTENT_TYPE_PNG));
    assert!(body.starts_with(&PNG_MAGIC));
}

#[tokio::test]
async fn each_request_rereads_the_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2016,8,1,9,100").unwrap();
    let app = app(file.path());

    let (_, _, first) = get(app.clone(), "/").await;
    writeln!(file, "2016,8,1,10,400\n2016,8,1,11,50").unwrap();
    file.flush().unwrap();
    let (_, _, second) = get(app, "/").await;

    assert!(first.starts_with(&PNG_MAGIC) && second.starts_with(&PNG_MAGIC));
    assert_ne!(first, second);
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let app = app(fixture());
    let requests = (0..8).map(|_| get(app.clone(), "/"));
    let responses = futures::future::join_all(requests).await;

    let (_, _, reference) = &responses[0];
    for (status, content_type, body) in &responses {
        assert_eq!(*status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(CONTENT_TYPE_PNG));
        assert_eq!(body, reference);
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn content_type(&self) -> &'static str {
        CONTENT_TYPE_PNG
    }

    fn render(&self, _spec: &ChartSpec<'_>, _sink: &mut dyn std::io::Write) -> Result<(), RenderError> {
        Err(RenderError::Encode("forced"))
    }
}

#[tokio::test]
async fn render_failure_answers_empty_png() {
    let state = AppState::new(ChartConfig::new(fixture()), Arc::new(FailingRenderer));
    let (status, content_type, body) = get(router(Arc::new(state)), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(CONTENT_TYPE_PNG));
    assert!(body.is_empty());
}

#[tokio::test]
async fn only_get_root_is_routed() {
    let (status, _, _) = get(app(fixture()), "/other").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let resp = app(fixture())
        .oneshot(Request::builder().method(Method::POST).uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
