//! Marketing API Client
//!
//! Thin wrapper over the upstream email-marketing REST API (profiles,
//! segments, campaigns, flows, metrics, events). Bodies pass through as
//! JSON; no retry, backoff, or pagination logic lives here.

mod client;

pub use client::{MarketingClient, ProfileQuery};

use thiserror::Error;

/// Errors talking to the upstream marketing API.
#[derive(Debug, Error)]
pub enum MarketingError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream API returned {status}: {body}")]
    Api { status: u16, body: String },
}
