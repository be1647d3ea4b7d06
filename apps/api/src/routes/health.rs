use axum::{
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde_json::json;

/// GET /health, GET /healthz
/// Liveness probe. Never cached.
pub async fn health_handler() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(json!({
            "ok": true,
            "service": "booster",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
