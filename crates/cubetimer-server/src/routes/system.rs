use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(root)).route("/health", get(health))
}

async fn root() -> &'static str {
    "cubetimer API v0.3"
}

async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Ready to time some solves".to_string(),
    })
}
