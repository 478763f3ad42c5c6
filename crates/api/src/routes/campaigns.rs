//! Campaign Routes

use axum::{extract::State, Json};
use fallback_content::CampaignAnalysis;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{demo, ApiError, AppState};

/// List campaigns, proxied or from the demo dataset.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    match &state.marketing {
        Some(client) => Ok(Json(client.get_campaigns().await?)),
        None => Ok(Json(json!({ "data": demo::campaigns() }))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub campaign_data: Value,
}

/// Score a campaign's performance.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<CampaignAnalysis> {
    Json(state.ai.campaign_analysis(&request.campaign_data).await)
}
