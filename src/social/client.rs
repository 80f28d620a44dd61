//! Social graph API client
//!
//! Stateless between calls: profile metrics are a single passthrough GET, and
//! post metrics fan out one request per recent post.

use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::future::try_join_all;
use reqwest::Client;
use serde_json::Value;

use super::model::MediaResponse;

const DEFAULT_BASE_URL: &str = "https://graph.facebook.com/v19.0";
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

const PROFILE_METRICS: &str = "impressions,reach,profile_views,followers_count";
const POST_METRICS: &str = "impressions,reach,engagement,saved,likes,comments";

/// Only the most recent posts get their metrics fetched
const RECENT_POST_LIMIT: usize = 5;

/// Client for the social graph API
pub struct SocialClient {
    http: Client,
    base_url: String,
    access_token: String,
    user_id: String,
}

impl SocialClient {
    pub fn new(access_token: String, user_id: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(UPSTREAM_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token,
            user_id,
        }
    }

    /// Override the upstream base URL (used by tests)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Day-period profile metrics, returned exactly as the upstream sends them
    pub async fn profile_insights(&self) -> Result<Value> {
        let url = format!("{}/{}/insights", self.base_url, self.user_id);
        let payload = self
            .http
            .get(&url)
            .query(&[
                ("metric", PROFILE_METRICS),
                ("period", "day"),
                ("access_token", self.access_token.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("failed to decode profile insights payload")?;

        Ok(payload)
    }

    /// The most recent posts, each merged with its per-post metrics under an
    /// `insights` key. Metric fetches run concurrently; upstream post
    /// ordering is preserved. One failing fetch fails the whole aggregate,
    /// never a partial list.
    pub async fn recent_posts_insights(&self) -> Result<Vec<Value>> {
        let url = format!("{}/{}/media", self.base_url, self.user_id);
        let media: MediaResponse = self
            .http
            .get(&url)
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("failed to decode recent media payload")?;

        let posts = media.data.into_iter().take(RECENT_POST_LIMIT);
        try_join_all(posts.map(|post| self.merge_post_insights(post))).await
    }

    async fn merge_post_insights(&self, mut post: Value) -> Result<Value> {
        let id = post
            .get("id")
            .and_then(Value::as_str)
            .context("media item is missing an id")?
            .to_string();

        let url = format!("{}/{}/insights", self.base_url, id);
        let insights: Value = self
            .http
            .get(&url)
            .query(&[
                ("metric", POST_METRICS),
                ("access_token", self.access_token.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("failed to decode insights for post {}", id))?;

        match post.as_object_mut() {
            Some(fields) => {
                fields.insert("insights".to_string(), insights);
            }
            None => anyhow::bail!("media item {} is not a JSON object", id),
        }

        Ok(post)
    }
}
