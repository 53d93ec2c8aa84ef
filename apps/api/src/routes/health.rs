use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe. Returns a fixed status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Resume parser is running",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
