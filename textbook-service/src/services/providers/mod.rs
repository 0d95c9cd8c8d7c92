//! Generative backend abstraction and implementations.
//!
//! Handlers only see [`TextProvider`], so the Gemini client can be swapped for the
//! scripted mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Failure of the backend call itself. Content refusals are not errors; see [`Generation`].
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Outcome of a completed generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// The backend refused the prompt.
    Blocked { reason: String },

    /// The backend answered without any usable output parts.
    Empty,

    /// Generated text.
    Text(String),
}

impl Generation {
    /// Short label used for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            Generation::Blocked { .. } => "blocked",
            Generation::Empty => "empty",
            Generation::Text(_) => "text",
        }
    }
}

/// A backend that turns an ordered list of prompt segments into text.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Human-readable backend label, e.g. `Gemini (gemini-2.5-flash)`.
    fn name(&self) -> &str;

    /// Generate a response for the given segments, in order.
    async fn generate(&self, segments: &[String]) -> Result<Generation, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
