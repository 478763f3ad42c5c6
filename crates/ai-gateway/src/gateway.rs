//! Gateway Implementation

use crate::{prompts, AiError};
use fallback_content::{
    CampaignAnalysis, CampaignData, ContentContext, EmailContentDraft, FallbackEngine,
    FlowRecommendationSet, SegmentQueryResult, SendTimePrediction, SubjectLineSet,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// A resolved remote backend: credentials were present and sane.
#[derive(Debug, Clone)]
struct RemoteBackend {
    base_url: String,
    api_key: String,
    model: String,
}

/// Gateway in front of an OpenAI-compatible chat backend.
///
/// Backend availability is decided once at construction and never
/// re-checked; the gateway is immutable afterwards and safe to share
/// across requests.
pub struct AiGateway {
    backend: Option<RemoteBackend>,
    http: reqwest::Client,
    engine: FallbackEngine,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// A key is usable when it is nonempty, long enough to be real, and not a
/// `xxxx` placeholder left in a config template.
fn credential_usable(key: &str) -> bool {
    key.len() > 10 && !key.contains("xxxx")
}

/// Strip markdown code-fence markup that chat models wrap around JSON.
fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

impl AiGateway {
    /// Resolve the backend once from configuration and build the gateway.
    pub fn new(api_key: Option<&str>, base_url: &str, model: &str) -> Self {
        let backend = match api_key {
            Some(key) if credential_usable(key) => {
                info!(model, "AI backend configured");
                Some(RemoteBackend {
                    base_url: base_url.trim_end_matches('/').to_string(),
                    api_key: key.to_string(),
                    model: model.to_string(),
                })
            }
            _ => {
                info!("no usable AI credential, content generation will use fallbacks");
                None
            }
        };
        Self {
            backend,
            http: reqwest::Client::new(),
            engine: FallbackEngine::new(),
        }
    }

    /// Whether a remote backend was configured at startup.
    pub fn backend_available(&self) -> bool {
        self.backend.is_some()
    }

    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, AiError> {
        let backend = self.backend.as_ref().ok_or(AiError::NotConfigured)?;
        let request = ChatRequest {
            model: &backend.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", backend.base_url))
            .bearer_auth(&backend.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AiError::EmptyCompletion)?;
        Ok(strip_code_fences(content.trim()))
    }

    async fn generate<T: DeserializeOwned>(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<T, AiError> {
        let content = self.complete(system, user, temperature, max_tokens).await?;
        Ok(serde_json::from_str(&content)?)
    }

    fn note_fallback(&self, operation: &str, err: &AiError) {
        match err {
            AiError::NotConfigured => debug!(operation, "using fallback content"),
            other => warn!(operation, error = %other, "AI backend failed, using fallback"),
        }
    }

    /// Parse a natural-language audience query into a segment definition.
    pub async fn parse_segment_query(&self, query: &str) -> SegmentQueryResult {
        match self
            .generate(prompts::SEGMENT_SYSTEM, query, 0.3, 600)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                self.note_fallback("segment parsing", &err);
                self.engine.parse_segment_query(query)
            }
        }
    }

    /// Generate five subject lines for the given campaign context.
    pub async fn subject_lines(&self, context: &Value) -> SubjectLineSet {
        let fields = content_context(context);
        let user = format!(
            "Campaign: {}\nAudience: {}\nKey message: {}\nBrand tone: {}",
            fields.purpose.as_deref().unwrap_or("promotional"),
            fields.audience.as_deref().unwrap_or("subscribers"),
            fields.message.as_deref().unwrap_or("special offer"),
            fields.tone.as_deref().unwrap_or("friendly professional"),
        );
        match self
            .generate(prompts::SUBJECT_SYSTEM, &user, 0.85, 800)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                self.note_fallback("subject lines", &err);
                self.engine.subject_lines(&fields)
            }
        }
    }

    /// Predict optimal send times from engagement data.
    pub async fn send_time(&self, engagement: &Value) -> SendTimePrediction {
        match self
            .generate(
                prompts::SEND_TIME_SYSTEM,
                &engagement.to_string(),
                0.2,
                800,
            )
            .await
        {
            Ok(result) => result,
            Err(err) => {
                self.note_fallback("send-time prediction", &err);
                self.engine.send_time()
            }
        }
    }

    /// Recommend automation flows for the given customer data.
    pub async fn flow_recommendations(&self, customer: &Value) -> FlowRecommendationSet {
        match self
            .generate(prompts::FLOWS_SYSTEM, &customer.to_string(), 0.5, 1000)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                self.note_fallback("flow recommendations", &err);
                self.engine.flow_recommendations()
            }
        }
    }

    /// Score campaign performance and produce insights.
    pub async fn campaign_analysis(&self, campaign: &Value) -> CampaignAnalysis {
        match self
            .generate(prompts::ANALYSIS_SYSTEM, &campaign.to_string(), 0.3, 800)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                self.note_fallback("campaign analysis", &err);
                let data: CampaignData =
                    serde_json::from_value(campaign.clone()).unwrap_or_default();
                self.engine.campaign_analysis(&data)
            }
        }
    }

    /// Generate a full email draft for the given context.
    pub async fn email_content(&self, context: &Value) -> EmailContentDraft {
        match self
            .generate(prompts::EMAIL_SYSTEM, &context.to_string(), 0.7, 600)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                self.note_fallback("email content", &err);
                self.engine.email_content(&content_context(context))
            }
        }
    }
}

/// Best-effort typed view of a free-form context object.
fn content_context(value: &Value) -> ContentContext {
    serde_json::from_value(value.clone()).unwrap_or_default()
}
