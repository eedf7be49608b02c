use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use super::AppState;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ready",
        "recipes": app.catalog().len(),
    }))
}
