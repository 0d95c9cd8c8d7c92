use axum::{extract::State, Json};
use service_core::error::AppError;

use super::{ai_error, NOT_CONFIGURED_WARNING};
use crate::dtos::{ContentResponse, TranslateRequest};
use crate::services::{generate_reply, prompt};
use crate::startup::AppState;

#[tracing::instrument(skip(state, request), fields(target_language = %request.target_language))]
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<ContentResponse>, AppError> {
    let Some(provider) = state.text_provider.as_deref() else {
        return Ok(Json(ContentResponse {
            content: NOT_CONFIGURED_WARNING.to_string(),
        }));
    };

    let segments = [prompt::translate_prompt(&request)];
    let content = generate_reply(provider, "translate", &segments)
        .await
        .map_err(|e| ai_error("translate", e))?;

    Ok(Json(ContentResponse { content }))
}
