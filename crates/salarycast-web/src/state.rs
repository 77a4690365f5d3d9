use crate::form::InputForm;
use metrics_exporter_prometheus::PrometheusHandle;
use salarycast_pipeline::SalaryPredictor;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded pipeline, read-only for the life of the process
    pub predictor: Arc<SalaryPredictor>,

    /// Widgets derived from the encoder vocabularies
    pub form: Arc<InputForm>,

    /// Prometheus handle when the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(predictor: SalaryPredictor) -> Self {
        let form = InputForm::from_predictor(&predictor);
        Self {
            predictor: Arc::new(predictor),
            form: Arc::new(form),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
