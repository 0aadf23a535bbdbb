use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::FieldErrors;
use crate::notice::Notice;

/// Failure of a call to the remote loan backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend rejected the bearer token")]
    Unauthorized,

    #[error("backend responded with {status}")]
    Rejected {
        status: reqwest::StatusCode,
        message: Option<String>,
    },

    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced by the JSON intake endpoints.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("application failed validation")]
    Validation(FieldErrors),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Backend(BackendError::Rejected { status, .. }) if status.is_client_error() => {
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_REQUEST)
            }
            AppError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(errors) => json!({
                "message": "Validation failed",
                "errors": errors,
            }),
            AppError::Backend(err) => json!({
                "message": Notice::submission_failed(err).description,
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
