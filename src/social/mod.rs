//! Social graph API client module

mod client;
mod model;

pub use client::SocialClient;
