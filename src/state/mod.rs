//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::reporting::ReportingClient;
use crate::social::SocialClient;

/// Shared application state. Both clients are constructed once at startup and
/// never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub social: Arc<SocialClient>,
    pub reporting: Arc<ReportingClient>,
}

impl AppState {
    pub fn new(social: Arc<SocialClient>, reporting: Arc<ReportingClient>) -> Self {
        Self { social, reporting }
    }
}

impl FromRef<AppState> for Arc<SocialClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.social.clone()
    }
}

impl FromRef<AppState> for Arc<ReportingClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.reporting.clone()
    }
}
