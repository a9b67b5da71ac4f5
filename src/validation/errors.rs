//! # Validation Errors
//!
//! The only error this crate raises. Lookups never fail and bodies that are
//! not maps degrade to empty input, so a failed validation is all that is
//! left to report.
//!
//! Error codes:
//! - REQUEST_VALIDATION_FAILED (422)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::result::ValidationResult;

/// Result type for validating operations
pub type RequestResult<T> = Result<T, ValidationFailure>;

/// Raised when a validator reports at least one error
#[derive(Debug, Clone, Error)]
#[error("Request validation failed with {} error(s)", .result.error_count())]
pub struct ValidationFailure {
    result: ValidationResult,
}

impl ValidationFailure {
    pub fn new(result: ValidationResult) -> Self {
        Self { result }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        "REQUEST_VALIDATION_FAILED"
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    /// The full result of the failed attempt
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn into_result(self) -> ValidationResult {
        self.result
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationFailure> for ErrorResponse {
    fn from(failure: &ValidationFailure) -> Self {
        Self {
            error: failure.to_string(),
            code: failure.code(),
            errors: failure.result.messages(),
        }
    }
}

impl IntoResponse for ValidationFailure {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
