//! AI Content Routes

use axum::{extract::State, Json};
use fallback_content::{EmailContentDraft, SubjectLineSet};
use serde_json::Value;
use std::sync::Arc;

use crate::AppState;

/// Generate subject lines from a free-form context object.
pub async fn subject_lines(
    State(state): State<Arc<AppState>>,
    Json(context): Json<Value>,
) -> Json<SubjectLineSet> {
    Json(state.ai.subject_lines(&context).await)
}

/// Generate a full email draft from a free-form context object.
pub async fn email_content(
    State(state): State<Arc<AppState>>,
    Json(context): Json<Value>,
) -> Json<EmailContentDraft> {
    Json(state.ai.email_content(&context).await)
}
