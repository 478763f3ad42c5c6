//! Profile Routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use marketing_api::ProfileQuery;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{demo, ApiError, AppState};

/// List profiles, proxied or from the demo dataset.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<Value>, ApiError> {
    match &state.marketing {
        Some(client) => Ok(Json(client.get_profiles(&query).await?)),
        None => Ok(Json(json!({ "data": demo::profiles() }))),
    }
}

/// Fetch a single profile by id.
pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match &state.marketing {
        Some(client) => Ok(Json(client.get_profile(&id).await?)),
        None => Ok(Json(json!({ "data": demo::profile_by_id(&id) }))),
    }
}
