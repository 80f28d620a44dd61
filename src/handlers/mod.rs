//! API handlers for the insights gateway

pub mod analytics;
pub mod insights;
