//! API Error Mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marketing_api::MarketingError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced to API clients. AI backend failures never appear here;
/// the gateway absorbs them into fallback content.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Upstream(#[from] MarketingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Upstream(err) => {
                error!(error = %err, "upstream marketing API failure");
                let status = match err {
                    MarketingError::Api { status, .. } => {
                        StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                    }
                    MarketingError::Transport(_) => StatusCode::BAD_GATEWAY,
                };
                (status, "upstream marketing API failure".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("Query is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_status_passes_through() {
        let response = ApiError::Upstream(MarketingError::Api {
            status: 429,
            body: "rate limited".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
