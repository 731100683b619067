use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use qrforge_api::config::ServerConfig;
use qrforge_api::router::build_app_router;
use qrforge_api::state::AppState;

/// A test application: the real router plus the temporary page/upload
/// directories it writes to. Keeps the [`TempDir`] alive for the duration
/// of the test.
pub struct TestApp {
    pub router: Router,
    pub pages_dir: PathBuf,
    pub uploads_dir: PathBuf,
    _tmp: TempDir,
}

/// Build a test `ServerConfig` rooted in a fresh temporary directory.
pub fn test_config(tmp: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 9091,
        public_url: None,
        pages_dir: tmp.path().join("pages"),
        uploads_dir: tmp.path().join("uploads"),
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, backed by
/// temporary storage directories.
///
/// This goes through [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) and static-file services that production uses.
pub fn build_test_app() -> TestApp {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let config = test_config(&tmp);
    let pages_dir = config.pages_dir.clone();
    let uploads_dir = config.uploads_dir.clone();

    let state = AppState {
        config: Arc::new(config),
    };

    TestApp {
        router: build_app_router(state),
        pages_dir,
        uploads_dir,
        _tmp: tmp,
    }
}

/// Issue a GET request against the router.
pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Issue a POST request with a JSON body against the router.
pub async fn post_json(router: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Build a multipart POST request with a single file field.
pub fn multipart_request(uri: &str, field_name: &str, filename: &str, data: &[u8]) -> Request<Body> {
    let boundary = "qrforge-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; \
             name=\"{field_name}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}
