use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static liveness message, no business logic.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "matcher-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
