//! System controller: liveness probe for the dashboard frontend

use axum::Json;
use serde_json::{json, Value};

pub struct SystemController;

impl SystemController {
    pub async fn health() -> Json<Value> {
        Json(json!({ "status": "ok" }))
    }
}
