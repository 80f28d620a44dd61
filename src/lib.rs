//! Insights Gateway Library
//!
//! This library exports the core modules for the insights gateway server: a
//! small HTTP facade that forwards dashboard requests to a social graph API
//! and a web-analytics reporting API and reshapes their responses.

pub mod config;
pub mod error;
pub mod handlers;
pub mod reporting;
pub mod routes;
pub mod social;
pub mod state;
