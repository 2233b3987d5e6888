use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub const SERVICE_NAME: &str = "Food Waste Zero-Point Planner API";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: &'static str,
}

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", SERVICE_NAME),
        version: env!("CARGO_PKG_VERSION"),
    })
}
