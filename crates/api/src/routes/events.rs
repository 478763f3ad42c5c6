//! Event Routes

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{ApiError, AppState};

/// Track a custom event, or acknowledge in demo mode.
pub async fn track(
    State(state): State<Arc<AppState>>,
    Json(attributes): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    match &state.marketing {
        Some(client) => {
            let created = client.create_event(attributes).await?;
            Ok(Json(json!({ "success": true, "data": created })))
        }
        None => Ok(Json(json!({
            "success": true,
            "message": "Event tracked (demo mode)",
        }))),
    }
}
