//! Application startup and lifecycle management.

use crate::config::TextbookConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::TextProvider;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TextbookConfig,
    /// `None` when no usable backend credential was configured.
    pub text_provider: Option<Arc<dyn TextProvider>>,
}

/// Build the Gemini provider from configuration, or `None` when it cannot be used.
pub fn build_text_provider(config: &TextbookConfig) -> Option<Arc<dyn TextProvider>> {
    let Some(api_key) = config.gemini.api_key.clone() else {
        tracing::warn!("GEMINI_API_KEY not found in environment");
        return None;
    };

    let gemini_config = GeminiConfig {
        api_key,
        model: config.gemini.model.clone(),
        base_url: config.gemini.base_url.clone(),
        request_timeout: Duration::from_secs(config.gemini.request_timeout_secs),
    };

    match GeminiTextProvider::new(gemini_config) {
        Ok(provider) => {
            tracing::info!(
                model = %config.gemini.model,
                "Gemini model initialized successfully"
            );
            Some(Arc::new(provider))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to configure Gemini");
            None
        }
    }
}

/// Assemble the HTTP router with CORS open to every origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/chat", post(handlers::chat))
        .route("/personalize", post(handlers::personalize))
        .route("/translate", post(handlers::translate))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the backend described by `config`.
    pub async fn build(config: TextbookConfig) -> Result<Self, AppError> {
        let text_provider = build_text_provider(&config);
        Self::build_with_provider(config, text_provider).await
    }

    /// Build the application around an explicit backend (or none).
    pub async fn build_with_provider(
        config: TextbookConfig,
        text_provider: Option<Arc<dyn TextProvider>>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let model_status = if text_provider.is_some() {
            "active"
        } else {
            "inactive"
        };
        tracing::info!(port, model_status, "Textbook service listening");

        Ok(Self {
            port,
            listener,
            state: AppState {
                config,
                text_provider,
            },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
