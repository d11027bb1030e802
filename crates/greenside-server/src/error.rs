use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use greenside_core::error::RecordError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    /// The record exists but violates its invariants.
    Unprocessable(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(m)
            | Self::NotFound(m)
            | Self::Conflict(m)
            | Self::Unprocessable(m)
            | Self::Internal(m) => write!(f, "{m}"),
        }
    }
}

impl From<RecordError> for AppError {
    fn from(e: RecordError) -> Self {
        let message = e.to_string();
        match e {
            RecordError::CourseNotFound(_) | RecordError::GameNotFound(_) => {
                Self::NotFound(message)
            },
            RecordError::DuplicateCourse(_) | RecordError::DuplicateGame(_) => {
                Self::Conflict(message)
            },
            RecordError::HoleOutOfRange { .. } | RecordError::PlayerOutOfRange { .. } => {
                Self::BadRequest(message)
            },
            RecordError::Store(_) => {
                tracing::error!(error = %message, "Record store failure");
                Self::Internal(message)
            },
            _ => Self::Unprocessable(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            Self::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            Self::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
            Self::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
            Self::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
