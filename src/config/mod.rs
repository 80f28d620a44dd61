//! Configuration management for the insights gateway
//!
//! This module handles loading and validating configuration from environment
//! variables. Missing credentials are fatal: the process refuses to start
//! rather than booting a gateway that cannot reach its upstreams.

use std::env;
use thiserror::Error;

use crate::reporting::auth::ServiceAccountKey;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the social graph API
    pub graph_api_url: String,

    /// Bearer token for the social graph API
    pub graph_access_token: String,

    /// Social account id whose insights are queried
    pub graph_user_id: String,

    /// Base URL of the analytics reporting API
    pub ga_api_url: String,

    /// Reporting property id
    pub ga_property_id: String,

    /// Service-account key material for the reporting API
    pub ga_credentials: ServiceAccountKey,

    /// Server port
    pub port: u16,

    /// CORS allowed origins
    pub cors_allowed_origins: Option<String>,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        let graph_access_token = env::var("GRAPH_ACCESS_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("GRAPH_ACCESS_TOKEN".to_string()))?;

        let graph_user_id = env::var("GRAPH_USER_ID")
            .map_err(|_| ConfigError::MissingEnvVar("GRAPH_USER_ID".to_string()))?;

        let ga_property_id = env::var("GA_PROPERTY_ID")
            .map_err(|_| ConfigError::MissingEnvVar("GA_PROPERTY_ID".to_string()))?;

        let ga_credentials = load_credentials()?;

        let graph_api_url = env::var("GRAPH_API_URL")
            .unwrap_or_else(|_| "https://graph.facebook.com/v19.0".to_string());

        let ga_api_url = env::var("GA_API_URL")
            .unwrap_or_else(|_| "https://analyticsdata.googleapis.com".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort("PORT must be a valid number".to_string()))?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS").ok();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            graph_api_url,
            graph_access_token,
            graph_user_id,
            ga_api_url,
            ga_property_id,
            ga_credentials,
            port,
            cors_allowed_origins,
            log_level,
        })
    }
}

/// Service-account key material comes in raw (`GA_CREDENTIALS_JSON`) or
/// base64-encoded (`GA_CREDENTIALS_BASE64`) form; raw wins when both are set.
fn load_credentials() -> Result<ServiceAccountKey, ConfigError> {
    if let Ok(raw) = env::var("GA_CREDENTIALS_JSON") {
        return ServiceAccountKey::from_json(&raw)
            .map_err(|e| ConfigError::InvalidCredentials(e.to_string()));
    }

    if let Ok(encoded) = env::var("GA_CREDENTIALS_BASE64") {
        return ServiceAccountKey::from_base64(&encoded)
            .map_err(|e| ConfigError::InvalidCredentials(e.to_string()));
    }

    Err(ConfigError::MissingEnvVar(
        "GA_CREDENTIALS_JSON or GA_CREDENTIALS_BASE64".to_string(),
    ))
}
