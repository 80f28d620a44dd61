//! Wire types for the social graph API

use serde::Deserialize;
use serde_json::Value;

/// Envelope of the media listing. Post fields are kept as raw JSON so the
/// gateway passes them through to the dashboard untouched.
#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    #[serde(default)]
    pub data: Vec<Value>,
}
