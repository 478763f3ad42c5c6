//! Client Implementation

use crate::MarketingError;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://a.klaviyo.com/api";
const API_REVISION: &str = "2024-10-15";

/// Pagination and filter parameters accepted by list endpoints.
/// The page size is accepted under both the dashboard's `pageSize`
/// spelling and the upstream's bracketed `page[size]` form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileQuery {
    #[serde(alias = "page[size]")]
    pub page_size: Option<u32>,
    pub filter: Option<String>,
}

impl ProfileQuery {
    /// Fetch a single record, for count/preview purposes.
    pub fn single() -> Self {
        Self {
            page_size: Some(1),
            filter: None,
        }
    }

    /// Fetch a small preview page.
    pub fn preview(count: u32) -> Self {
        Self {
            page_size: Some(count),
            filter: None,
        }
    }

    fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(size) = self.page_size {
            pairs.push(("page[size]".to_string(), size.to_string()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("filter".to_string(), filter.clone()));
        }
        pairs
    }
}

/// Authenticated client for the upstream marketing API.
pub struct MarketingClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MarketingClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, MarketingError> {
        debug!(path, "GET upstream");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Klaviyo-API-Key {}", self.api_key))
            .header("revision", API_REVISION)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, MarketingError> {
        debug!(path, "POST upstream");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Klaviyo-API-Key {}", self.api_key))
            .header("revision", API_REVISION)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn into_json(response: reqwest::Response) -> Result<Value, MarketingError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketingError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    // Profiles

    pub async fn get_profiles(&self, query: &ProfileQuery) -> Result<Value, MarketingError> {
        self.get("/profiles/", &query.to_pairs()).await
    }

    pub async fn get_profile(&self, profile_id: &str) -> Result<Value, MarketingError> {
        self.get(&format!("/profiles/{profile_id}/"), &[]).await
    }

    pub async fn create_or_update_profile(
        &self,
        attributes: Value,
    ) -> Result<Value, MarketingError> {
        self.post(
            "/profiles/",
            &json!({"data": {"type": "profile", "attributes": attributes}}),
        )
        .await
    }

    // Segments

    pub async fn get_segments(&self) -> Result<Value, MarketingError> {
        self.get("/segments/", &[]).await
    }

    pub async fn get_segment(&self, segment_id: &str) -> Result<Value, MarketingError> {
        self.get(&format!("/segments/{segment_id}/"), &[]).await
    }

    pub async fn get_segment_profiles(&self, segment_id: &str) -> Result<Value, MarketingError> {
        self.get(&format!("/segments/{segment_id}/profiles/"), &[])
            .await
    }

    pub async fn create_segment(
        &self,
        name: &str,
        definition: Value,
    ) -> Result<Value, MarketingError> {
        self.post(
            "/segments/",
            &json!({
                "data": {
                    "type": "segment",
                    "attributes": {"name": name, "definition": definition},
                }
            }),
        )
        .await
    }

    // Events

    pub async fn get_events(&self, query: &ProfileQuery) -> Result<Value, MarketingError> {
        self.get("/events/", &query.to_pairs()).await
    }

    pub async fn create_event(&self, attributes: Value) -> Result<Value, MarketingError> {
        self.post(
            "/events/",
            &json!({"data": {"type": "event", "attributes": attributes}}),
        )
        .await
    }

    // Campaigns

    pub async fn get_campaigns(&self) -> Result<Value, MarketingError> {
        self.get("/campaigns/", &[]).await
    }

    pub async fn get_campaign(&self, campaign_id: &str) -> Result<Value, MarketingError> {
        self.get(&format!("/campaigns/{campaign_id}/"), &[]).await
    }

    // Metrics

    pub async fn get_metrics(&self) -> Result<Value, MarketingError> {
        self.get("/metrics/", &[]).await
    }

    pub async fn query_metric_aggregates(
        &self,
        attributes: Value,
    ) -> Result<Value, MarketingError> {
        self.post(
            "/metric-aggregates/",
            &json!({"data": {"type": "metric-aggregate", "attributes": attributes}}),
        )
        .await
    }

    // Lists and flows

    pub async fn get_lists(&self) -> Result<Value, MarketingError> {
        self.get("/lists/", &[]).await
    }

    pub async fn get_flows(&self) -> Result<Value, MarketingError> {
        self.get("/flows/", &[]).await
    }

    pub async fn get_flow(&self, flow_id: &str) -> Result<Value, MarketingError> {
        self.get(&format!("/flows/{flow_id}/"), &[]).await
    }

    // Account

    pub async fn get_account(&self) -> Result<Value, MarketingError> {
        self.get("/accounts/", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let query = ProfileQuery {
            page_size: Some(5),
            filter: Some("equals(email,\"a@b.com\")".to_string()),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page[size]".to_string(), "5".to_string()),
                (
                    "filter".to_string(),
                    "equals(email,\"a@b.com\")".to_string()
                ),
            ]
        );
        assert!(ProfileQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = MarketingClient::with_base_url("key", "https://example.test/api/");
        assert_eq!(client.base_url, "https://example.test/api");
    }

    #[test]
    fn test_page_size_accepts_both_spellings() {
        let camel: ProfileQuery =
            serde_json::from_value(serde_json::json!({"pageSize": 5})).unwrap();
        assert_eq!(camel.page_size, Some(5));

        let bracketed: ProfileQuery =
            serde_json::from_value(serde_json::json!({"page[size]": 5})).unwrap();
        assert_eq!(bracketed.page_size, Some(5));
    }

    #[test]
    fn test_preview_query() {
        let query = ProfileQuery::preview(5);
        assert_eq!(query.page_size, Some(5));
        assert!(query.filter.is_none());
    }
}
