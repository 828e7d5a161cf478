use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness check; the body is fixed.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
