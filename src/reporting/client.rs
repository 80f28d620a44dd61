//! Reporting API client
//!
//! One explicitly constructed handle per process, shared read-only across
//! requests (the token cache is interior-mutable). There is no lazy global:
//! construction validates the key material up front, and a handle built
//! without credentials answers every live query with a defined
//! "not initialized" error instead of crashing.

use std::time::Duration;

use reqwest::Client;

use super::auth::{ServiceAccountKey, TokenProvider};
use super::dates;
use super::example;
use super::model::{
    CountryTraffic, DailyTraffic, DeviceTraffic, Dimension, Engagement, Metric, ReachRow,
    ReportRequest, ReportResponse, Retention, RetentionRow, TrafficSource,
};
use super::{QueryMode, ReportingError};

const DEFAULT_BASE_URL: &str = "https://analyticsdata.googleapis.com";
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the analytics reporting API
pub struct ReportingClient {
    inner: Option<Inner>,
}

struct Inner {
    http: Client,
    base_url: String,
    property_id: String,
    tokens: TokenProvider,
}

impl ReportingClient {
    /// Create a client for one reporting property. Fails if the service
    /// account key material is unusable.
    pub fn new(key: ServiceAccountKey, property_id: String) -> Result<Self, ReportingError> {
        let tokens = TokenProvider::new(key)?;
        let http = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            inner: Some(Inner {
                http,
                base_url: DEFAULT_BASE_URL.to_string(),
                property_id,
                tokens,
            }),
        })
    }

    /// A handle with no credentials behind it. Live queries return
    /// `ReportingError::NotInitialized`; example-mode queries still work.
    pub fn uninitialized() -> Self {
        Self { inner: None }
    }

    /// Override the upstream base URL (used by tests)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        if let Some(inner) = self.inner.as_mut() {
            inner.base_url = base_url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Sessions and total users per date over the fixed trailing window
    pub async fn reach(&self) -> Result<Vec<ReachRow>, ReportingError> {
        let response = self
            .run_report(ReportRequest {
                date_ranges: vec![dates::trailing_window()],
                dimensions: vec![Dimension::new("date")],
                metrics: vec![Metric::new("sessions"), Metric::new("totalUsers")],
            })
            .await?;

        Ok(response
            .mapped_rows()
            .map(|row| ReachRow {
                date: row.dimension("date"),
                sessions: row.metric_u64("sessions"),
                total_users: row.metric_u64("totalUsers"),
            })
            .collect())
    }

    /// Sessions and users per date over `[start, end]` or the trailing window
    pub async fn by_date(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        mode: QueryMode,
    ) -> Result<Vec<DailyTraffic>, ReportingError> {
        if mode.is_example() {
            return Ok(example::daily_traffic());
        }

        let response = self
            .run_report(ReportRequest {
                date_ranges: vec![dates::resolve_range(start, end)],
                dimensions: vec![Dimension::new("date")],
                metrics: vec![Metric::new("sessions"), Metric::new("totalUsers")],
            })
            .await?;

        Ok(response
            .mapped_rows()
            .map(|row| DailyTraffic {
                date: row.dimension("date"),
                sessions: row.metric_u64("sessions"),
                users: row.metric_u64("totalUsers"),
            })
            .collect())
    }

    /// Sessions per date and country
    pub async fn by_country(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        mode: QueryMode,
    ) -> Result<Vec<CountryTraffic>, ReportingError> {
        if mode.is_example() {
            return Ok(example::country_traffic());
        }

        let response = self
            .run_report(ReportRequest {
                date_ranges: vec![dates::resolve_range(start, end)],
                dimensions: vec![Dimension::new("date"), Dimension::new("country")],
                metrics: vec![Metric::new("sessions")],
            })
            .await?;

        Ok(response
            .mapped_rows()
            .map(|row| CountryTraffic {
                date: row.dimension("date"),
                country: row.dimension("country"),
                sessions: row.metric_u64("sessions"),
            })
            .collect())
    }

    /// Sessions per date and device category
    pub async fn by_device(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        mode: QueryMode,
    ) -> Result<Vec<DeviceTraffic>, ReportingError> {
        if mode.is_example() {
            return Ok(example::device_traffic());
        }

        let response = self
            .run_report(ReportRequest {
                date_ranges: vec![dates::resolve_range(start, end)],
                dimensions: vec![Dimension::new("date"), Dimension::new("deviceCategory")],
                metrics: vec![Metric::new("sessions")],
            })
            .await?;

        Ok(response
            .mapped_rows()
            .map(|row| DeviceTraffic {
                date: row.dimension("date"),
                device: row.dimension("deviceCategory"),
                sessions: row.metric_u64("sessions"),
            })
            .collect())
    }

    /// Sessions per traffic source over the fixed trailing window
    pub async fn traffic_sources(
        &self,
        mode: QueryMode,
    ) -> Result<Vec<TrafficSource>, ReportingError> {
        if mode.is_example() {
            return Ok(example::traffic_sources());
        }

        let response = self
            .run_report(ReportRequest {
                date_ranges: vec![dates::trailing_window()],
                dimensions: vec![Dimension::new("sessionSource")],
                metrics: vec![Metric::new("sessions")],
            })
            .await?;

        Ok(response
            .mapped_rows()
            .map(|row| TrafficSource {
                source: row.dimension("sessionSource"),
                sessions: row.metric_u64("sessions"),
            })
            .collect())
    }

    /// A single aggregate engagement record over the fixed trailing window
    pub async fn engagement(&self, mode: QueryMode) -> Result<Engagement, ReportingError> {
        if mode.is_example() {
            return Ok(example::engagement());
        }

        let response = self
            .run_report(ReportRequest {
                date_ranges: vec![dates::trailing_window()],
                dimensions: vec![],
                metrics: vec![
                    Metric::new("averageSessionDuration"),
                    Metric::new("engagedSessions"),
                ],
            })
            .await?;

        // A dimensionless report has at most one row; none means no traffic.
        let engagement = response
            .mapped_rows()
            .next()
            .map(|row| Engagement {
                average_session_duration: row.metric_f64("averageSessionDuration"),
                engaged_sessions: row.metric_u64("engagedSessions"),
            })
            .unwrap_or_default();
        Ok(engagement)
    }

    /// Active users per date, split new vs. returning. Example mode returns a
    /// synthetic cohort table instead (a different shape, kept as-is).
    pub async fn user_retention(&self, mode: QueryMode) -> Result<Retention, ReportingError> {
        if mode.is_example() {
            return Ok(Retention::Cohorts(example::retention_cohorts()));
        }

        let response = self
            .run_report(ReportRequest {
                date_ranges: vec![dates::trailing_window()],
                dimensions: vec![Dimension::new("date"), Dimension::new("newVsReturning")],
                metrics: vec![Metric::new("activeUsers")],
            })
            .await?;

        Ok(Retention::Rows(
            response
                .mapped_rows()
                .map(|row| RetentionRow {
                    date: row.dimension("date"),
                    new_vs_returning: row.dimension("newVsReturning"),
                    active_users: row.metric_u64("activeUsers"),
                })
                .collect(),
        ))
    }

    async fn run_report(&self, request: ReportRequest) -> Result<ReportResponse, ReportingError> {
        let inner = self.inner.as_ref().ok_or(ReportingError::NotInitialized)?;

        let token = inner.tokens.bearer_token(&inner.http).await?;
        let url = format!(
            "{}/v1beta/properties/{}:runReport",
            inner.base_url, inner.property_id
        );

        let response = inner
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_uninitialized_live_queries_fail_deterministically() {
        let client = ReportingClient::uninitialized();

        assert!(matches!(
            client.reach().await,
            Err(ReportingError::NotInitialized)
        ));
        assert!(matches!(
            client.by_date(None, None, QueryMode::Live).await,
            Err(ReportingError::NotInitialized)
        ));
        assert!(matches!(
            client.engagement(QueryMode::Live).await,
            Err(ReportingError::NotInitialized)
        ));
        assert!(matches!(
            client.user_retention(QueryMode::Live).await,
            Err(ReportingError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_uninitialized_example_queries_still_work() {
        let client = ReportingClient::uninitialized();

        let rows = client
            .by_date(None, None, QueryMode::Example)
            .await
            .unwrap();
        assert_eq!(rows.len(), dates::TRAILING_WINDOW_DAYS);

        assert!(client.traffic_sources(QueryMode::Example).await.is_ok());
        assert!(client.engagement(QueryMode::Example).await.is_ok());
    }
}
