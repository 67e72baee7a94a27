use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

/// Liveness probe polled by the sidecar before it routes workflow calls here
async fn get_health_check() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "up",
    }))
}
