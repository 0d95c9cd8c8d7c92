//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Once, OnceLock};
use std::time::Duration;

/// How often histogram buckets are drained between scrapes.
const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

static INIT: Once = Once::new();

/// Initialize the metrics recorder.
///
/// Call once at startup before any metrics are recorded. Later calls are ignored.
/// When called inside a Tokio runtime, a background task runs the recorder upkeep.
pub fn init_metrics() {
    INIT.call_once(install_recorder);
}

fn install_recorder() {
    let handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            return;
        }
    };

    if let Ok(runtime) = tokio::runtime::Handle::try_current() {
        let upkeep_handle = handle.clone();
        runtime.spawn(async move {
            let mut interval = tokio::time::interval(UPKEEP_INTERVAL);
            loop {
                interval.tick().await;
                upkeep_handle.run_upkeep();
            }
        });
    }

    let _ = METRICS_HANDLE.set(handle);
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// Count one generation call by endpoint and outcome (`text`, `blocked`, `empty`, `error`).
pub fn record_generation(endpoint: &'static str, outcome: &'static str) {
    counter!("textbook_generations_total", "endpoint" => endpoint, "outcome" => outcome)
        .increment(1);
}

pub fn record_provider_latency(endpoint: &'static str, elapsed: Duration) {
    histogram!("textbook_provider_latency_seconds", "endpoint" => endpoint)
        .record(elapsed.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recorded_generations_are_rendered() {
        init_metrics();
        init_metrics();

        record_generation("translate", "blocked");
        record_provider_latency("translate", Duration::from_millis(12));

        let rendered = get_metrics();
        assert!(rendered.contains("textbook_generations_total"));
        assert!(rendered.contains(r#"outcome="blocked""#));
        assert!(rendered.contains("textbook_provider_latency_seconds"));
    }
}
