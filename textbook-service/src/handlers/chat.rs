use axum::{extract::State, Json};
use service_core::error::AppError;

use super::ai_error;
use crate::dtos::{ChatRequest, ChatResponse};
use crate::services::{generate_reply, prompt};
use crate::startup::AppState;

pub const CHAT_NOT_CONFIGURED_WARNING: &str =
    "⚠️ Backend Configuration Error: GEMINI_API_KEY missing or invalid.";

#[tracing::instrument(skip(state, request), fields(has_context = request.context.is_some(), has_profile = request.user_profile.is_some()))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(provider) = state.text_provider.as_deref() else {
        return Ok(Json(ChatResponse {
            reply: CHAT_NOT_CONFIGURED_WARNING.to_string(),
            sources: Vec::new(),
        }));
    };

    let segments = prompt::chat_segments(&request);
    let reply = generate_reply(provider, "chat", &segments)
        .await
        .map_err(|e| ai_error("chat", e))?;

    Ok(Json(ChatResponse {
        reply,
        sources: vec![format!("Generated via {}", provider.name())],
    }))
}
