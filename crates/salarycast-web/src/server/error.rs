//! Mapping pipeline errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use salarycast_core::Error;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Pipeline(#[from] Error),

    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Pipeline(e) => status_for(e),
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Form and vocabulary errors are the caller's fault; everything else is ours
pub fn status_for(error: &Error) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": true,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
