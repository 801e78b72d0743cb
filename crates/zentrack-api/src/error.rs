use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use zentrack_export::error::ExportError;
use zentrack_instruments::error::{AssessmentError, InstrumentError};

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<AssessmentError> for ApiError {
    fn from(e: AssessmentError) -> Self {
        match e {
            AssessmentError::InvalidAnswer { .. } => ApiError::BadRequest(e.to_string()),
            AssessmentError::InvalidState(_) => ApiError::Conflict(e.to_string()),
        }
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownQuestionnaire(_) => ApiError::NotFound(e.to_string()),
            InstrumentError::UnknownUnsetPolicy(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
