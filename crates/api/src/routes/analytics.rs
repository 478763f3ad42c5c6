//! Analytics Routes

use axum::{extract::State, Json};
use fallback_content::SendTimePrediction;
use marketing_api::ProfileQuery;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{demo, ApiError, AppState};

/// Fallback total when the upstream meta count is unavailable.
const DEFAULT_PROFILE_TOTAL: u64 = 2847;

/// Dashboard overview: headline metrics, engagement trend, recent campaigns.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let (total_profiles, recent_campaigns) = match &state.marketing {
        Some(client) => {
            let total = client
                .get_profiles(&ProfileQuery::single())
                .await?
                .pointer("/meta/count")
                .and_then(Value::as_u64)
                .unwrap_or(DEFAULT_PROFILE_TOTAL);
            let campaigns = client
                .get_campaigns()
                .await?
                .get("data")
                .cloned()
                .unwrap_or_else(|| json!([]));
            (total, campaigns)
        }
        None => (demo::PROFILE_COUNT * 350, demo::campaigns()),
    };

    Ok(Json(json!({
        "metrics": {
            "totalProfiles": total_profiles,
            "avgOpenRate": 0.412,
            "avgClickRate": 0.098,
            "totalRevenue": 156_780,
            "revenueGrowth": 0.23,
        },
        "engagementTrend": demo::engagement_trend(),
        "recentCampaigns": recent_campaigns,
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTimeRequest {
    #[serde(default)]
    pub engagement_data: Value,
}

/// Predict optimal send times.
pub async fn send_time(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendTimeRequest>,
) -> Json<SendTimePrediction> {
    Json(state.ai.send_time(&request.engagement_data).await)
}
