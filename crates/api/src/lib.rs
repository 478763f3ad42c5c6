//! Marketing Dashboard API Server
//!
//! REST API for the marketing dashboard. Proxies the upstream marketing
//! API (or serves a demo dataset when no key is configured) and augments
//! it with AI-generated content that degrades to rule-based fallbacks.

use ai_gateway::AiGateway;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use marketing_api::MarketingClient;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod demo;
mod error;
mod routes;
pub mod settings;

pub use error::ApiError;
pub use settings::Settings;

/// Application state shared across handlers. Everything here is resolved
/// once at startup and read-only afterwards.
pub struct AppState {
    /// Upstream marketing client; `None` in demo mode.
    pub marketing: Option<MarketingClient>,
    /// AI gateway with fallback content generation.
    pub ai: AiGateway,
    /// Version string
    pub version: String,
    /// Start time
    pub started: Instant,
}

impl AppState {
    /// Build state from settings, resolving demo mode and the AI backend.
    pub fn from_settings(settings: &Settings) -> Self {
        let marketing = if settings.demo_mode() {
            info!("running in demo mode, serving sample data");
            None
        } else {
            settings.marketing.api_key.as_deref().map(|key| {
                MarketingClient::with_base_url(key, &settings.marketing.base_url)
            })
        };

        Self {
            marketing,
            ai: AiGateway::new(
                settings.ai.api_key.as_deref(),
                &settings.ai.base_url,
                &settings.ai.model,
            ),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started: Instant::now(),
        }
    }

    /// Whether proxy endpoints serve the demo dataset.
    pub fn demo_mode(&self) -> bool {
        self.marketing.is_none()
    }
}

/// Status response for the dashboard connection banner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: String,
    pub demo_mode: bool,
    pub marketing_connected: bool,
    pub ai_connected: bool,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Create the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/profiles", get(routes::profiles::list))
        .route("/api/profiles/:id", get(routes::profiles::get_one))
        .route("/api/segments", get(routes::segments::list))
        .route("/api/segments/ai-create", post(routes::segments::ai_create))
        .route("/api/segments/create", post(routes::segments::create))
        .route("/api/campaigns", get(routes::campaigns::list))
        .route("/api/campaigns/analyze", post(routes::campaigns::analyze))
        .route("/api/flows", get(routes::flows::list))
        .route(
            "/api/flows/recommendations",
            post(routes::flows::recommendations),
        )
        .route("/api/analytics/dashboard", get(routes::analytics::dashboard))
        .route("/api/analytics/send-time", post(routes::analytics::send_time))
        .route("/api/ai/subject-lines", post(routes::ai::subject_lines))
        .route("/api/ai/email-content", post(routes::ai::email_content))
        .route("/api/events/track", post(routes::events::track))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Connection status handler
async fn status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(StatusResponse {
        status: "connected".to_string(),
        demo_mode: state.demo_mode(),
        marketing_connected: !state.demo_mode(),
        ai_connected: state.ai.backend_available(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.started.elapsed().as_secs(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_settings(&settings));
    let app = create_router(state);

    info!("Starting API server on {}", settings.server.address);

    let listener = tokio::net::TcpListener::bind(&settings.server.address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
