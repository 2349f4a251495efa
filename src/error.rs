use std::fmt::Display;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

// Adapted from https://github.com/tokio-rs/axum/blob/main/examples/anyhow-error-response/src/main.rs
#[derive(Debug)]
pub struct IpsumError {
    pub status: StatusCode,
    pub message: HttpErrorResponse,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HttpErrorResponse {
    pub error: String,
}

impl From<String> for HttpErrorResponse {
    fn from(message: String) -> Self {
        HttpErrorResponse { error: message }
    }
}

impl From<&str> for HttpErrorResponse {
    fn from(message: &str) -> Self {
        HttpErrorResponse {
            error: message.to_string(),
        }
    }
}

/// Rejections of untrusted generation parameters, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidCount,
    InvalidUnits,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidCount => {
                write!(f, "Invalid count. Please provide a number between 1 and 100.")
            }
            ValidationError::InvalidUnits => write!(
                f,
                "Invalid units. Please use 'paragraphs', 'sentences', or 'words'."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl IpsumError {
    pub fn new(status: StatusCode, message: impl Into<HttpErrorResponse>) -> Self {
        IpsumError {
            status,
            message: message.into(),
        }
    }

    /// A failure inside the generation dependency. The underlying message is kept so callers
    /// can see what went wrong.
    pub fn unexpected(err: anyhow::Error) -> Self {
        IpsumError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unexpected error: {}", err),
        )
    }

    pub fn not_found() -> Self {
        IpsumError::new(StatusCode::NOT_FOUND, "Not found")
    }
}

impl From<ValidationError> for IpsumError {
    fn from(err: ValidationError) -> Self {
        IpsumError::new(StatusCode::BAD_REQUEST, err.to_string())
    }
}

impl From<JsonRejection> for IpsumError {
    fn from(rejection: JsonRejection) -> Self {
        IpsumError::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid JSON body: {}", rejection.body_text()),
        )
    }
}

impl From<QueryRejection> for IpsumError {
    fn from(rejection: QueryRejection) -> Self {
        IpsumError::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid query string: {}", rejection.body_text()),
        )
    }
}

impl IntoResponse for IpsumError {
    fn into_response(self) -> Response {
        let mut res = Json(self.message).into_response();
        *res.status_mut() = self.status;
        res
    }
}

pub type IpsumResult<T, E = IpsumError> = Result<T, E>;
