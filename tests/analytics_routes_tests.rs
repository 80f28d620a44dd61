//! Router-level tests: each route returns 200 with the client payload, or
//! 500 with the fixed `{"error": ...}` envelope when its client fails.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use insights_gateway::reporting::ReportingClient;
use insights_gateway::routes;
use insights_gateway::social::SocialClient;
use insights_gateway::state::AppState;

/// An app whose social upstream is the given mock server and whose reporting
/// client carries no credentials (example mode still works; live queries
/// fail with the defined not-initialized error).
fn app_with_social(server_uri: &str) -> Router {
    let social = Arc::new(
        SocialClient::new("test-token".to_string(), "acct-1".to_string())
            .with_base_url(server_uri.to_string()),
    );
    let reporting = Arc::new(ReportingClient::uninitialized());
    routes::app(AppState::new(social, reporting))
}

fn app_with_reporting(server_uri: &str) -> Router {
    let social = Arc::new(SocialClient::new(
        "test-token".to_string(),
        "acct-1".to_string(),
    ));
    let reporting = Arc::new(common::test_reporting_client(server_uri, "prop-1"));
    routes::app(AppState::new(social, reporting))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_endpoint_reports_version() {
    let (status, body) = get_json(app_with_social("http://127.0.0.1:9"), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn example_mode_by_date_returns_trailing_window() {
    let (status, body) =
        get_json(app_with_social("http://127.0.0.1:9"), "/analytics/by-date?type=example").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array of daily records");
    assert_eq!(rows.len(), 30);
    for row in rows {
        assert!(row["date"].is_string());
        assert!(row["sessions"].as_u64().unwrap() >= 10);
        assert!(row["sessions"].as_u64().unwrap() <= 100);
        assert!(row["users"].as_u64().unwrap() >= 5);
        assert!(row["users"].as_u64().unwrap() <= 80);
    }
}

#[tokio::test]
async fn example_mode_engagement_returns_single_object() {
    let (status, body) = get_json(
        app_with_social("http://127.0.0.1:9"),
        "/analytics/engagement?type=example",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_object(), "one aggregate record, not an array");
    assert!(body["averageSessionDuration"].is_number());
    assert!(body["engagedSessions"].is_number());
}

#[tokio::test]
async fn example_mode_retention_returns_cohort_table() {
    let (status, body) = get_json(
        app_with_social("http://127.0.0.1:9"),
        "/analytics/user-retention?type=example",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let cohorts = body.as_array().expect("cohort table");
    assert!(!cohorts.is_empty());
    for cohort in cohorts {
        assert!(cohort["cohort"].is_string());
        assert!(cohort["retentionRate"].is_number());
    }
}

#[tokio::test]
async fn failing_reach_returns_fixed_error_envelope() {
    let (status, body) = get_json(app_with_social("http://127.0.0.1:9"), "/analytics/reach").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to fetch site reach" }));
}

#[tokio::test]
async fn failing_by_date_returns_fixed_error_envelope() {
    // No `type=example`, so the uninitialized reporting client fails.
    let (status, body) = get_json(
        app_with_social("http://127.0.0.1:9"),
        "/analytics/by-date?startDate=2026-01-01&endDate=2026-01-31",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to fetch traffic by date" }));
}

#[tokio::test]
async fn live_reach_round_trip_through_router() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-bearer-token",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1beta/properties/prop-1:runReport"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dimensionHeaders": [{ "name": "date" }],
            "metricHeaders": [{ "name": "sessions" }, { "name": "totalUsers" }],
            "rows": [{
                "dimensionValues": [{ "value": "2026-08-20" }],
                "metricValues": [{ "value": "55" }, { "value": "40" }]
            }]
        })))
        .mount(&server)
        .await;

    let (status, body) = get_json(app_with_reporting(&server.uri()), "/analytics/reach").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "date": "2026-08-20", "sessions": 55, "totalUsers": 40 }])
    );
}

#[tokio::test]
async fn profile_insights_route_passes_payload_through() {
    let server = MockServer::start().await;

    let upstream_payload = json!({
        "data": [{ "name": "followers_count", "values": [{ "value": 1234 }] }]
    });

    Mock::given(method("GET"))
        .and(path("/acct-1/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_payload.clone()))
        .mount(&server)
        .await;

    let (status, body) = get_json(app_with_social(&server.uri()), "/insights/perfil").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream_payload);
}

#[tokio::test]
async fn failing_profile_insights_returns_fixed_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/acct-1/insights"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get_json(app_with_social(&server.uri()), "/insights/perfil").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to fetch profile insights" }));
}

#[tokio::test]
async fn failing_posts_route_returns_fixed_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/acct-1/media"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get_json(app_with_social(&server.uri()), "/insights/postagens").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to fetch post insights" }));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get_json(app_with_social("http://127.0.0.1:9"), "/analytics/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
