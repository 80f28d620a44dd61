//! Insights Gateway Server
//!
//! A small HTTP facade for a front-end dashboard: social profile and post
//! insights from a graph API, and traffic/engagement/retention reports from a
//! web-analytics reporting API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use insights_gateway::config::Config;
use insights_gateway::reporting::ReportingClient;
use insights_gateway::routes;
use insights_gateway::social::SocialClient;
use insights_gateway::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration; missing credentials refuse to start
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    // Initialize the social graph client
    let social = Arc::new(
        SocialClient::new(
            config.graph_access_token.clone(),
            config.graph_user_id.clone(),
        )
        .with_base_url(config.graph_api_url.clone()),
    );

    // Initialize the reporting client; bad key material is fatal
    let reporting = match ReportingClient::new(
        config.ga_credentials.clone(),
        config.ga_property_id.clone(),
    ) {
        Ok(client) => Arc::new(client.with_base_url(config.ga_api_url.clone())),
        Err(e) => {
            eprintln!("Failed to initialize reporting client: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(social, reporting);

    // Create the app router
    let app = routes::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(configure_cors(config.cors_allowed_origins.as_deref()));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let allowed_origins = allowed_origins.unwrap_or_default();

    if allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
