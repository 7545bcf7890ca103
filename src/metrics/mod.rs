//! Prometheus metrics for the notification service.
//!
//! Dispatch attempts, classified results, gateway latency, and renderer
//! fallbacks are exported so delivery success rate can be monitored without
//! parsing log text.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    Encoder, IntCounterVec, TextEncoder,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "notify";

lazy_static! {
    /// Total dispatch attempts by outcome code
    pub static ref DISPATCH_ATTEMPTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_dispatch_attempts_total", METRIC_PREFIX),
        "Total WhatsApp dispatch attempts",
        &["outcome"]
    ).unwrap();

    /// Dispatch results by outcome code and classification
    pub static ref DISPATCH_RESULTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_dispatch_results_total", METRIC_PREFIX),
        "Dispatch results by outcome and classification",
        &["outcome", "result"]
    ).unwrap();

    /// Gateway round-trip duration
    pub static ref DISPATCH_DURATION_SECONDS: Histogram = register_histogram!(
        format!("{}_dispatch_duration_seconds", METRIC_PREFIX),
        "WhatsApp dispatch duration in seconds",
        vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    ).unwrap();

    /// Times the renderer degraded to the fallback message
    pub static ref TEMPLATE_FALLBACKS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_template_fallbacks_total", METRIC_PREFIX),
        "Total renders that used the fallback message"
    ).unwrap();
}

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}
