//! Web-analytics route definitions

use axum::{routing::get, Router};

use crate::handlers::analytics;
use crate::state::AppState;

/// Create web-analytics routes
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/reach", get(analytics::reach))
        .route("/analytics/by-date", get(analytics::by_date))
        .route("/analytics/by-country", get(analytics::by_country))
        .route("/analytics/by-device", get(analytics::by_device))
        .route("/analytics/traffic-sources", get(analytics::traffic_sources))
        .route("/analytics/engagement", get(analytics::engagement))
        .route("/analytics/user-retention", get(analytics::user_retention))
}
