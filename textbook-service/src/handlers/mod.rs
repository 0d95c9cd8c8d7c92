//! HTTP handlers for the textbook service.

pub mod chat;
pub mod health;
pub mod personalize;
pub mod translate;

pub use chat::chat;
pub use health::{health_check, metrics, readiness_check, root};
pub use personalize::personalize;
pub use translate::translate;

use crate::services::ProviderError;
use service_core::error::AppError;

/// Warning returned by `/personalize` and `/translate` when no backend is configured.
pub const NOT_CONFIGURED_WARNING: &str = "⚠️ Gemini Not Configured";

/// Convert a backend failure at the HTTP boundary.
fn ai_error(endpoint: &str, err: ProviderError) -> AppError {
    tracing::error!(endpoint, error = %err, "Endpoint error");
    AppError::AiError(err.to_string())
}
