use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus HTTP exporter on :9000.
/// After this call, any metrics recorded via the `metrics` crate
/// macros (counter!, histogram!) are automatically exported at /metrics.
pub fn init_metrics_server() {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], 9000))
        .install()
        .expect("failed to start Prometheus metrics server");
}

// ── Option store metrics ─────────────────────────────────────────

pub fn record_option_save(key: &str, result: &str) {
    counter!("option_saves_total", "key" => key.to_string(), "result" => result.to_string())
        .increment(1);
}

pub fn record_save_batch(outcome: &str, latency_ms: f64) {
    counter!("option_save_batches_total", "outcome" => outcome.to_string()).increment(1);
    histogram!("option_save_batch_ms", "outcome" => outcome.to_string()).record(latency_ms);
}

// ── View metrics ─────────────────────────────────────────────────

pub fn record_view_built(currency: &str, presets: usize) {
    counter!("recharge_views_total", "currency" => currency.to_string()).increment(1);
    histogram!("recharge_view_presets").record(presets as f64);
}
