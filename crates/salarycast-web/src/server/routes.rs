use crate::metrics::{record_error, record_prediction};
use crate::server::error::{status_for, ApiError};
use crate::server::page::{render_page, Outcome};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use salarycast_core::{Error, FormSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

// ============================================================================
// Page
// ============================================================================

/// Render the form and the prediction for the submitted values
///
/// An unreadable submission re-renders the controls with what was sent and
/// shows the error in place of the prediction.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let (values, outcome, status) = match state.form.parse(&params) {
        Ok(snapshot) => {
            let values = state.form.snapshot_values(&snapshot);
            match state.predictor.assemble_and_predict(&snapshot) {
                Ok(prediction) => {
                    record_prediction("page", &prediction);
                    debug!(value = prediction.value, "Page prediction");
                    (values, Outcome::Prediction(prediction), StatusCode::OK)
                }
                Err(e) => {
                    record_error("page", &e);
                    let status = status_for(&e);
                    (values, Outcome::Error(e.to_string()), status)
                }
            }
        }
        Err(e) => {
            record_error("page", &e);
            (params, Outcome::Error(e.to_string()), StatusCode::BAD_REQUEST)
        }
    };

    (status, Html(render_page(&state.form, &values, &outcome))).into_response()
}

// ============================================================================
// JSON API
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub request_id: String,
    pub prediction: f64,
    pub display: String,
    pub latency_us: u64,
}

/// Predict from a JSON snapshot
///
/// Body rejections, including out-of-range fields, are form errors.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<FormSnapshot>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let Json(snapshot) = body.map_err(|rejection| {
        let error = Error::form(rejection.body_text());
        record_error("api", &error);
        error
    })?;

    let prediction = state
        .predictor
        .assemble_and_predict(&snapshot)
        .map_err(|e| {
            record_error("api", &e);
            e
        })?;
    record_prediction("api", &prediction);

    info!(
        request_id = %request_id,
        value = prediction.value,
        latency_us = prediction.latency_us,
        "Prediction served"
    );

    Ok(Json(PredictResponse {
        request_id,
        prediction: prediction.value,
        display: prediction.display(),
        latency_us: prediction.latency_us,
    }))
}

pub async fn form_spec(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.form.as_ref().clone())
}

pub async fn schema(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "model": state.predictor.model_name(),
        "columns": state.predictor.schema().columns(),
    }))
}

// ============================================================================
// Operations
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn metrics(State(state): State<AppState>) -> Result<String, ApiError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| ApiError::NotFound("metrics recorder is not installed".to_string()))
}
