//! Wire types for the reporting API and the dashboard-facing records
//!
//! Upstream rows arrive as ordered dimension/metric value arrays. Cells are
//! addressed through the response's header names, never by position, so a
//! reordered upstream column cannot silently misalign a field. Missing metric
//! values default to `"0"` before numeric parsing.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Report request
// ---------------------------------------------------------------------------

/// A `runReport` request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub date_ranges: Vec<DateRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dimension {
    pub name: String,
}

impl Dimension {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub name: String,
}

impl Metric {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Report response
// ---------------------------------------------------------------------------

/// A `runReport` response. All fields are optional upstream; an empty report
/// deserializes to empty vectors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(default)]
    pub dimension_headers: Vec<Header>,
    #[serde(default)]
    pub metric_headers: Vec<Header>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    #[serde(default)]
    pub dimension_values: Vec<CellValue>,
    #[serde(default)]
    pub metric_values: Vec<CellValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CellValue {
    #[serde(default)]
    pub value: Option<String>,
}

impl ReportResponse {
    /// Rows with cells addressable by header name
    pub fn mapped_rows(&self) -> impl Iterator<Item = MappedRow<'_>> + '_ {
        self.rows.iter().map(move |row| MappedRow {
            response: self,
            row,
        })
    }
}

/// A single report row resolved against its response headers
pub struct MappedRow<'a> {
    response: &'a ReportResponse,
    row: &'a Row,
}

impl MappedRow<'_> {
    /// Dimension value by header name; empty string when absent
    pub fn dimension(&self, name: &str) -> String {
        self.response
            .dimension_headers
            .iter()
            .position(|h| h.name == name)
            .and_then(|i| self.row.dimension_values.get(i))
            .and_then(|cell| cell.value.clone())
            .unwrap_or_default()
    }

    fn metric_raw(&self, name: &str) -> String {
        self.response
            .metric_headers
            .iter()
            .position(|h| h.name == name)
            .and_then(|i| self.row.metric_values.get(i))
            .and_then(|cell| cell.value.clone())
            .unwrap_or_else(|| "0".to_string())
    }

    /// Integer metric by header name; absent or unparseable values become 0
    pub fn metric_u64(&self, name: &str) -> u64 {
        self.metric_raw(name).parse().unwrap_or(0)
    }

    /// Float metric by header name; absent or unparseable values become 0.0
    pub fn metric_f64(&self, name: &str) -> f64 {
        self.metric_raw(name).parse().unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Dashboard-facing records
// ---------------------------------------------------------------------------

/// One reach row: sessions and total users for a single date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachRow {
    pub date: String,
    pub sessions: u64,
    pub total_users: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTraffic {
    pub date: String,
    pub sessions: u64,
    pub users: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTraffic {
    pub date: String,
    pub country: String,
    pub sessions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceTraffic {
    pub date: String,
    pub device: String,
    pub sessions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSource {
    pub source: String,
    pub sessions: u64,
}

/// Single aggregate engagement record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub average_session_duration: f64,
    pub engaged_sessions: u64,
}

/// One live retention row: active users for a date, split new vs. returning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionRow {
    pub date: String,
    pub new_vs_returning: String,
    pub active_users: u64,
}

/// One synthetic retention cohort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionCohort {
    pub cohort: String,
    pub retention_rate: f64,
}

/// Retention payloads differ between live and example mode; the example
/// generator predates the live query and was never reconciled with it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Retention {
    Cohorts(Vec<RetentionCohort>),
    Rows(Vec<RetentionRow>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> ReportResponse {
        // Metric headers deliberately ordered totalUsers-first to prove the
        // lookup goes through names, not positions.
        serde_json::from_value(json!({
            "dimensionHeaders": [{ "name": "date" }, { "name": "country" }],
            "metricHeaders": [{ "name": "totalUsers" }, { "name": "sessions" }],
            "rows": [
                {
                    "dimensionValues": [{ "value": "20260801" }, { "value": "Brazil" }],
                    "metricValues": [{ "value": "42" }, { "value": "77" }]
                },
                {
                    "dimensionValues": [{ "value": "20260802" }, { "value": "Canada" }],
                    "metricValues": [{}, { "value": "not-a-number" }]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_mapping_is_by_header_name() {
        let response = sample_response();
        let rows: Vec<_> = response.mapped_rows().collect();

        assert_eq!(rows[0].dimension("date"), "20260801");
        assert_eq!(rows[0].dimension("country"), "Brazil");
        assert_eq!(rows[0].metric_u64("sessions"), 77);
        assert_eq!(rows[0].metric_u64("totalUsers"), 42);
    }

    #[test]
    fn test_missing_and_unparseable_metrics_default_to_zero() {
        let response = sample_response();
        let rows: Vec<_> = response.mapped_rows().collect();

        assert_eq!(rows[1].metric_u64("totalUsers"), 0, "null cell");
        assert_eq!(rows[1].metric_u64("sessions"), 0, "non-numeric cell");
    }

    #[test]
    fn test_unknown_names_default() {
        let response = sample_response();
        let row = response.mapped_rows().next().unwrap();

        assert_eq!(row.dimension("deviceCategory"), "");
        assert_eq!(row.metric_u64("engagedSessions"), 0);
        assert_eq!(row.metric_f64("averageSessionDuration"), 0.0);
    }

    #[test]
    fn test_empty_response_deserializes() {
        let response: ReportResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.mapped_rows().count(), 0);
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = ReportRequest {
            date_ranges: vec![DateRange {
                start_date: "2026-01-01".to_string(),
                end_date: "2026-01-31".to_string(),
            }],
            dimensions: vec![Dimension::new("date")],
            metrics: vec![Metric::new("sessions")],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["dateRanges"][0]["startDate"], "2026-01-01");
        assert_eq!(value["dimensions"][0]["name"], "date");
        assert_eq!(value["metrics"][0]["name"], "sessions");
    }

    #[test]
    fn test_dimensionless_request_omits_dimensions() {
        let request = ReportRequest {
            date_ranges: vec![DateRange {
                start_date: "30daysAgo".to_string(),
                end_date: "today".to_string(),
            }],
            dimensions: vec![],
            metrics: vec![Metric::new("engagedSessions")],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("dimensions").is_none());
    }

    #[test]
    fn test_engagement_serializes_camel_case() {
        let engagement = Engagement {
            average_session_duration: 123.4,
            engaged_sessions: 56,
        };

        let value = serde_json::to_value(&engagement).unwrap();
        assert_eq!(value["averageSessionDuration"], 123.4);
        assert_eq!(value["engagedSessions"], 56);
    }
}
