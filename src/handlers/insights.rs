//! Social insight HTTP handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::ApiError;
use crate::social::SocialClient;

/// GET /insights/perfil - profile metrics, passed through from upstream
pub async fn profile_insights(
    State(social): State<Arc<SocialClient>>,
) -> Result<Json<Value>, ApiError> {
    let data = social
        .profile_insights()
        .await
        .map_err(|e| ApiError::upstream("failed to fetch profile insights", e))?;

    Ok(Json(data))
}

/// GET /insights/postagens - recent posts merged with their metrics
pub async fn recent_posts_insights(
    State(social): State<Arc<SocialClient>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let data = social
        .recent_posts_insights()
        .await
        .map_err(|e| ApiError::upstream("failed to fetch post insights", e))?;

    Ok(Json(data))
}
