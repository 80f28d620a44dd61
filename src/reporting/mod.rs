//! Analytics-reporting client module
//!
//! Wraps the web-analytics reporting API: service-account authentication,
//! parameterized report queries, and the named-field mapping that turns raw
//! dimension/metric arrays into dashboard-shaped records. An `example` query
//! mode generates synthetic data locally so the dashboard can be developed
//! without live credentials.

pub mod auth;
pub mod client;
pub mod dates;
pub mod example;
pub mod model;

pub use client::ReportingClient;

use thiserror::Error;

/// Reporting client errors
#[derive(Error, Debug)]
pub enum ReportingError {
    #[error("reporting client is not initialized")]
    NotInitialized,

    #[error("invalid service account key: {0}")]
    Key(#[from] jsonwebtoken::errors::Error),

    #[error("token exchange failed: {0}")]
    Auth(String),

    #[error("reporting API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Whether a query should hit the live upstream or return synthetic data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    Example,
    #[default]
    Live,
}

impl QueryMode {
    /// Parse the `type` query parameter. Only the literal `example` selects
    /// example mode; anything else (including absence) means a live query.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("example") => QueryMode::Example,
            _ => QueryMode::Live,
        }
    }

    pub fn is_example(self) -> bool {
        matches!(self, QueryMode::Example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_mode_from_param() {
        assert_eq!(QueryMode::from_param(Some("example")), QueryMode::Example);
        assert_eq!(QueryMode::from_param(Some("real")), QueryMode::Live);
        assert_eq!(QueryMode::from_param(Some("")), QueryMode::Live);
        assert_eq!(QueryMode::from_param(None), QueryMode::Live);
    }
}
