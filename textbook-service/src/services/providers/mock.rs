//! Mock provider for testing.

use super::{Generation, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// `Text("Mock response for: <last segment>")`.
    Echo,
    Blocked(String),
    Empty,
    /// Fail the call with `ProviderError::ApiError`.
    Fail(String),
}

/// Scripted text provider that records every prompt it receives.
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Segments of every `generate` call so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Segments of the most recent `generate` call.
    pub fn last_call(&self) -> Option<Vec<String>> {
        self.calls().pop()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn generate(&self, segments: &[String]) -> Result<Generation, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(segments.to_vec());

        match &self.behavior {
            MockBehavior::Echo => Ok(Generation::Text(format!(
                "Mock response for: {}",
                segments.last().map(String::as_str).unwrap_or_default()
            ))),
            MockBehavior::Blocked(reason) => Ok(Generation::Blocked {
                reason: reason.clone(),
            }),
            MockBehavior::Empty => Ok(Generation::Empty),
            MockBehavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.behavior {
            MockBehavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
            _ => Ok(()),
        }
    }
}
