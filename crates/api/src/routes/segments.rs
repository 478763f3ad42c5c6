//! Segment Routes

use axum::{extract::State, Json};
use marketing_api::ProfileQuery;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{demo, ApiError, AppState};

/// List segments, proxied or from the demo dataset.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    match &state.marketing {
        Some(client) => Ok(Json(client.get_segments().await?)),
        None => Ok(Json(json!({ "data": demo::segments() }))),
    }
}

#[derive(Debug, Deserialize)]
pub struct AiCreateRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Parse a natural-language query into a segment definition with a
/// preview of matching profiles.
pub async fn ai_create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AiCreateRequest>,
) -> Result<Json<Value>, ApiError> {
    let query = request.query.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Query is required".to_string()));
    }

    let parsed = state.ai.parse_segment_query(&query).await;

    let sample_profiles = match &state.marketing {
        Some(client) => client
            .get_profiles(&ProfileQuery::preview(5))
            .await?
            .get("data")
            .cloned()
            .unwrap_or_else(|| json!([])),
        None => demo::sample_profiles(5),
    };

    Ok(Json(json!({
        "parsed": parsed,
        "preview": {
            "estimatedSize": demo::estimated_size(&query),
            "sampleProfiles": sample_profiles,
        },
    })))
}

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub name: String,
    #[serde(default)]
    pub definition: Value,
}

/// Create a segment upstream, or acknowledge in demo mode.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateRequest>,
) -> Result<Json<Value>, ApiError> {
    match &state.marketing {
        Some(client) => {
            let created = client
                .create_segment(&request.name, request.definition)
                .await?;
            Ok(Json(json!({ "success": true, "data": created })))
        }
        None => {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0);
            Ok(Json(json!({
                "success": true,
                "data": {
                    "id": format!("seg-{millis}"),
                    "attributes": { "name": request.name, "definition": request.definition },
                },
                "message": "Segment created successfully (demo mode)",
            })))
        }
    }
}
