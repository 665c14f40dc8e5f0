//! API Errors
//!
//! Failures surfaced over HTTP, each mapped to a status code and a JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ingestion::extract::ExtractError;

#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required query-string parameter absent or empty.
    #[error("Query parameter \"{0}\" is required")]
    MissingParam(&'static str),

    #[error("No file uploaded")]
    NoFile,

    #[error("Invalid file type! Only PDF, CSV, and TXT are allowed.")]
    InvalidFileType(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Error processing file")]
    Extraction(#[from] ExtractError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::NoFile => StatusCode::BAD_REQUEST,
            ApiError::InvalidFileType(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            ApiError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            ApiError::Extraction(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            details: err.details(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}: {:?}", self, self.details());
        } else {
            tracing::warn!("Rejected request: {:?}", self);
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
