//! Synthetic example-mode data
//!
//! Generated locally with no upstream calls, so the dashboard can be built
//! against realistic shapes without live credentials. Values are random but
//! range-bounded; shapes match the live queries except for retention, whose
//! cohort table is a standalone fixture.

use chrono::{Duration, Utc};
use rand::Rng;

use super::dates::{last_n_dates, TRAILING_WINDOW_DAYS};
use super::model::{
    CountryTraffic, DailyTraffic, DeviceTraffic, Engagement, RetentionCohort, TrafficSource,
};

const COUNTRIES: [&str; 4] = ["Brazil", "United States", "India", "Canada"];
const DEVICES: [&str; 3] = ["mobile", "desktop", "tablet"];
const SOURCES: [&str; 5] = ["google", "direct", "instagram", "facebook", "newsletter"];

/// Number of synthetic weekly retention cohorts
const RETENTION_COHORTS: usize = 6;

/// One row per day of the trailing window
pub fn daily_traffic() -> Vec<DailyTraffic> {
    let mut rng = rand::thread_rng();
    last_n_dates(TRAILING_WINDOW_DAYS)
        .into_iter()
        .map(|date| DailyTraffic {
            date,
            sessions: rng.gen_range(10..=100),
            users: rng.gen_range(5..=80),
        })
        .collect()
}

/// One row per day per country over the trailing window
pub fn country_traffic() -> Vec<CountryTraffic> {
    let mut rng = rand::thread_rng();
    last_n_dates(TRAILING_WINDOW_DAYS)
        .into_iter()
        .flat_map(|date| {
            let mut rows = Vec::with_capacity(COUNTRIES.len());
            for country in COUNTRIES {
                rows.push(CountryTraffic {
                    date: date.clone(),
                    country: country.to_string(),
                    sessions: rng.gen_range(1..=20),
                });
            }
            rows
        })
        .collect()
}

/// One row per day per device category over the trailing window
pub fn device_traffic() -> Vec<DeviceTraffic> {
    let mut rng = rand::thread_rng();
    last_n_dates(TRAILING_WINDOW_DAYS)
        .into_iter()
        .flat_map(|date| {
            let mut rows = Vec::with_capacity(DEVICES.len());
            for device in DEVICES {
                rows.push(DeviceTraffic {
                    date: date.clone(),
                    device: device.to_string(),
                    sessions: rng.gen_range(1..=25),
                });
            }
            rows
        })
        .collect()
}

/// One row per traffic source
pub fn traffic_sources() -> Vec<TrafficSource> {
    let mut rng = rand::thread_rng();
    SOURCES
        .iter()
        .map(|source| TrafficSource {
            source: source.to_string(),
            sessions: rng.gen_range(5..=50),
        })
        .collect()
}

/// A single randomized engagement record
pub fn engagement() -> Engagement {
    let mut rng = rand::thread_rng();
    Engagement {
        average_session_duration: round1(rng.gen_range(60.0..300.0)),
        engaged_sessions: rng.gen_range(50..=500),
    }
}

/// Weekly cohorts with strictly decreasing retention. Each cohort draws from
/// its own non-overlapping band, so older cohorts always retain less. Labels
/// are cohort start dates and intentionally ignore any requested window.
pub fn retention_cohorts() -> Vec<RetentionCohort> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    (0..RETENTION_COHORTS)
        .map(|week| {
            let upper = 88.0 - 14.0 * week as f64;
            RetentionCohort {
                cohort: (today - Duration::weeks(week as i64))
                    .format("%Y-%m-%d")
                    .to_string(),
                retention_rate: round1(rng.gen_range((upper - 13.0)..=upper)),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
