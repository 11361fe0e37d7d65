use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::http::server::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
