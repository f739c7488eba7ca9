//! Axum route handlers for the resume chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::chat::rules::SUGGESTIONS;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Arbitrary resume document; any shape is accepted as long as the top
    /// level is a JSON object.
    pub resume_data: Map<String, Value>,
    pub user_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
    pub updated_resume: Map<String, Value>,
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /resume/chat
///
/// Applies the instruction to the resume document and returns the edited
/// copy together with the fixed suggestion list. The message echoes the
/// instruction whether or not any field actually changed.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!(
        resume_data = ?request.resume_data,
        user_prompt = %request.user_prompt,
        "Received chat request"
    );

    let updated_resume = state
        .editor
        .apply(&request.resume_data, &request.user_prompt)
        .await?;

    Ok(Json(ChatResponse {
        success: true,
        message: format!(
            "Resume updated based on your request: '{}'",
            request.user_prompt
        ),
        updated_resume,
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }))
}
