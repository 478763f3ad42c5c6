//! AI Gateway
//!
//! Routes content-generation requests to an OpenAI-compatible chat backend
//! when one is configured, and degrades to the rule-based fallback engine
//! on any failure: missing credentials, transport errors, or malformed
//! responses. Callers always get a usable artifact; the `isFallback` flag
//! tells them which path produced it.

mod gateway;
mod prompts;

pub use gateway::AiGateway;

use thiserror::Error;

/// Internal failure reasons on the remote path. Never surfaced to callers;
/// every failure degrades to fallback content.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("no AI backend configured")]
    NotConfigured,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned no completion")]
    EmptyCompletion,
    #[error("malformed backend response: {0}")]
    Malformed(#[from] serde_json::Error),
}
