//! Web-analytics HTTP handlers
//!
//! Each handler is a 1:1 forward to one reporting query. Query parameters are
//! not validated here; bad bounds surface as an upstream failure.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::reporting::model::{
    CountryTraffic, DailyTraffic, DeviceTraffic, Engagement, ReachRow, Retention, TrafficSource,
};
use crate::reporting::{QueryMode, ReportingClient};

/// Date-range query parameters
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub mode: Option<String>,
}

/// Mode-only query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ModeQuery {
    #[serde(rename = "type")]
    pub mode: Option<String>,
}

/// GET /analytics/reach
pub async fn reach(
    State(reporting): State<Arc<ReportingClient>>,
) -> Result<Json<Vec<ReachRow>>, ApiError> {
    let rows = reporting
        .reach()
        .await
        .map_err(|e| ApiError::upstream("failed to fetch site reach", e.into()))?;

    Ok(Json(rows))
}

/// GET /analytics/by-date
pub async fn by_date(
    State(reporting): State<Arc<ReportingClient>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<DailyTraffic>>, ApiError> {
    let rows = reporting
        .by_date(
            query.start_date.as_deref(),
            query.end_date.as_deref(),
            QueryMode::from_param(query.mode.as_deref()),
        )
        .await
        .map_err(|e| ApiError::upstream("failed to fetch traffic by date", e.into()))?;

    Ok(Json(rows))
}

/// GET /analytics/by-country
pub async fn by_country(
    State(reporting): State<Arc<ReportingClient>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<CountryTraffic>>, ApiError> {
    let rows = reporting
        .by_country(
            query.start_date.as_deref(),
            query.end_date.as_deref(),
            QueryMode::from_param(query.mode.as_deref()),
        )
        .await
        .map_err(|e| ApiError::upstream("failed to fetch traffic by country", e.into()))?;

    Ok(Json(rows))
}

/// GET /analytics/by-device
pub async fn by_device(
    State(reporting): State<Arc<ReportingClient>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<DeviceTraffic>>, ApiError> {
    let rows = reporting
        .by_device(
            query.start_date.as_deref(),
            query.end_date.as_deref(),
            QueryMode::from_param(query.mode.as_deref()),
        )
        .await
        .map_err(|e| ApiError::upstream("failed to fetch traffic by device", e.into()))?;

    Ok(Json(rows))
}

/// GET /analytics/traffic-sources
pub async fn traffic_sources(
    State(reporting): State<Arc<ReportingClient>>,
    Query(query): Query<ModeQuery>,
) -> Result<Json<Vec<TrafficSource>>, ApiError> {
    let rows = reporting
        .traffic_sources(QueryMode::from_param(query.mode.as_deref()))
        .await
        .map_err(|e| ApiError::upstream("failed to fetch traffic sources", e.into()))?;

    Ok(Json(rows))
}

/// GET /analytics/engagement
pub async fn engagement(
    State(reporting): State<Arc<ReportingClient>>,
    Query(query): Query<ModeQuery>,
) -> Result<Json<Engagement>, ApiError> {
    let record = reporting
        .engagement(QueryMode::from_param(query.mode.as_deref()))
        .await
        .map_err(|e| ApiError::upstream("failed to fetch engagement data", e.into()))?;

    Ok(Json(record))
}

/// GET /analytics/user-retention
pub async fn user_retention(
    State(reporting): State<Arc<ReportingClient>>,
    Query(query): Query<ModeQuery>,
) -> Result<Json<Retention>, ApiError> {
    let rows = reporting
        .user_retention(QueryMode::from_param(query.mode.as_deref()))
        .await
        .map_err(|e| ApiError::upstream("failed to fetch retention data", e.into()))?;

    Ok(Json(rows))
}
