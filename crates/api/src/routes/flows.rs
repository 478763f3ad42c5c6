//! Flow Routes

use axum::{extract::State, Json};
use fallback_content::FlowRecommendationSet;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{demo, ApiError, AppState};

/// List flows, proxied or from the demo dataset.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    match &state.marketing {
        Some(client) => Ok(Json(client.get_flows().await?)),
        None => Ok(Json(json!({ "data": demo::flows() }))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub customer_data: Value,
}

/// Recommend automation flows.
pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendationsRequest>,
) -> Json<FlowRecommendationSet> {
    Json(state.ai.flow_recommendations(&request.customer_data).await)
}
