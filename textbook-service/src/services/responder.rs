//! Backend call and result normalization shared by every endpoint.

use super::metrics::{record_generation, record_provider_latency};
use super::providers::{Generation, ProviderError, TextProvider};
use std::time::Instant;

pub const EMPTY_RESPONSE_WARNING: &str =
    "⚠️ The model returned an empty response (Safety Filter likely triggered).";

/// Turn a backend outcome into the user-visible string.
pub fn normalize(generation: Generation) -> String {
    match generation {
        Generation::Blocked { reason } => format!("⚠️ Response blocked. Reason: {}", reason),
        Generation::Empty => EMPTY_RESPONSE_WARNING.to_string(),
        Generation::Text(text) => text,
    }
}

/// Send `segments` to the backend and normalize the outcome.
///
/// Blocked and empty outputs come back as `Ok` warning strings; only a failed call is an
/// error.
#[tracing::instrument(skip(provider, segments), fields(provider = %provider.name(), segments = segments.len()))]
pub async fn generate_reply(
    provider: &dyn TextProvider,
    endpoint: &'static str,
    segments: &[String],
) -> Result<String, ProviderError> {
    let started = Instant::now();
    let result = provider.generate(segments).await;
    record_provider_latency(endpoint, started.elapsed());

    match result {
        Ok(generation) => {
            record_generation(endpoint, generation.outcome());
            if !matches!(generation, Generation::Text(_)) {
                tracing::warn!(outcome = generation.outcome(), "Backend returned no usable text");
            }
            Ok(normalize(generation))
        }
        Err(e) => {
            record_generation(endpoint, "error");
            tracing::error!(error = %e, "Backend generation failed");
            Err(e)
        }
    }
}
