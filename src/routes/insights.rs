//! Social insight route definitions

use axum::{routing::get, Router};

use crate::handlers::insights;
use crate::state::AppState;

/// Create social insight routes
pub fn insights_routes() -> Router<AppState> {
    Router::new()
        .route("/insights/perfil", get(insights::profile_insights))
        .route("/insights/postagens", get(insights::recent_posts_insights))
}
