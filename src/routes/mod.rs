//! Route definitions for the insights gateway API

mod analytics;
mod insights;

pub use analytics::analytics_routes;
pub use insights::insights_routes;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(insights_routes())
        .merge(analytics_routes())
        .with_state(state)
}

async fn root() -> &'static str {
    "Insights Gateway API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint. The gateway holds no local state worth probing;
/// upstream health is only learned by querying.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
