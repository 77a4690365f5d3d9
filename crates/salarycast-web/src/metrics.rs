//! Prometheus metrics for the prediction surfaces

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use salarycast_core::{Error, Prediction};

pub const PREDICTIONS_TOTAL: &str = "salarycast_predictions_total";
pub const ERRORS_TOTAL: &str = "salarycast_errors_total";
pub const INFERENCE_LATENCY_US: &str = "salarycast_inference_latency_us";

/// Install the global recorder and describe every metric
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(PREDICTIONS_TOTAL, "Total number of predictions served by surface");
    metrics::describe_counter!(ERRORS_TOTAL, "Total number of failed predictions by surface and kind");
    metrics::describe_histogram!(
        INFERENCE_LATENCY_US,
        metrics::Unit::Microseconds,
        "Feature assembly plus inference latency in microseconds"
    );

    tracing::info!("Metrics exporter initialized");
    Ok(handle)
}

pub fn record_prediction(surface: &'static str, prediction: &Prediction) {
    metrics::counter!(PREDICTIONS_TOTAL, "surface" => surface).increment(1);
    metrics::histogram!(INFERENCE_LATENCY_US, "surface" => surface).record(prediction.latency_us as f64);
}

pub fn record_error(surface: &'static str, error: &Error) {
    metrics::counter!(ERRORS_TOTAL, "surface" => surface, "kind" => error_kind(error)).increment(1);
}

/// Low-cardinality label for an error
pub fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::Artifact(_) => "artifact",
        Error::UnknownCategory { .. } => "unknown_category",
        Error::Schema(_) => "schema",
        Error::Form(_) => "form",
        Error::Inference(_) => "inference",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_labels() {
        let labels: Vec<_> = [
            Error::artifact("missing"),
            Error::unknown_category("Gender", "x"),
            Error::schema("width"),
            Error::form("age"),
            Error::inference("nan"),
        ]
        .iter()
        .map(error_kind)
        .collect();

        assert_eq!(labels, ["artifact", "unknown_category", "schema", "form", "inference"]);
    }
}
