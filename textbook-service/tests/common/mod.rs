#![allow(dead_code)]

use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;
use textbook_service::config::{GeminiSettings, ObservabilityConfig, TextbookConfig};
use textbook_service::services::providers::mock::{MockBehavior, MockTextProvider};
use textbook_service::services::TextProvider;
use textbook_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
    /// Present when the app was spawned with a mock backend.
    pub provider: Option<Arc<MockTextProvider>>,
}

pub fn test_config() -> TextbookConfig {
    TextbookConfig {
        common: CoreConfig { port: 0 },
        gemini: GeminiSettings::default(),
        observability: ObservabilityConfig::default(),
    }
}

impl TestApp {
    /// Spawn the app with a mock backend behaving as `behavior`.
    pub async fn spawn(behavior: MockBehavior) -> Self {
        let provider = Arc::new(MockTextProvider::new(behavior));
        let dyn_provider: Arc<dyn TextProvider> = provider.clone();
        Self::spawn_inner(Some(dyn_provider), Some(provider)).await
    }

    /// Spawn the app with no backend configured.
    pub async fn spawn_unconfigured() -> Self {
        Self::spawn_inner(None, None).await
    }

    async fn spawn_inner(
        text_provider: Option<Arc<dyn TextProvider>>,
        provider: Option<Arc<MockTextProvider>>,
    ) -> Self {
        let app = Application::build_with_provider(test_config(), text_provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build HTTP client");

        // Wait for the server to accept connections
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            client,
            provider,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to send request")
    }

    /// Segments of the most recent backend call.
    pub fn last_segments(&self) -> Vec<String> {
        self.provider
            .as_ref()
            .and_then(|p| p.last_call())
            .expect("backend was not called")
    }

    pub fn backend_calls(&self) -> usize {
        self.provider.as_ref().map(|p| p.calls().len()).unwrap_or(0)
    }
}
