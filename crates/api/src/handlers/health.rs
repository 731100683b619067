use axum::Json;
use serde_json::json;

/// GET /health
///
/// Liveness check for load balancers and monitoring.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
