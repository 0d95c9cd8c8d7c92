use axum::{extract::State, Json};
use service_core::error::AppError;

use super::{ai_error, NOT_CONFIGURED_WARNING};
use crate::dtos::{ContentResponse, PersonalizeRequest};
use crate::services::{generate_reply, prompt};
use crate::startup::AppState;

/// Rewrite content for the reader's software/hardware background.
#[tracing::instrument(skip(state, request), fields(content_len = request.content.len()))]
pub async fn personalize(
    State(state): State<AppState>,
    Json(request): Json<PersonalizeRequest>,
) -> Result<Json<ContentResponse>, AppError> {
    let Some(provider) = state.text_provider.as_deref() else {
        return Ok(Json(ContentResponse {
            content: NOT_CONFIGURED_WARNING.to_string(),
        }));
    };

    let segments = [prompt::personalize_prompt(&request)];
    let content = generate_reply(provider, "personalize", &segments)
        .await
        .map_err(|e| ai_error("personalize", e))?;

    Ok(Json(ContentResponse { content }))
}
