use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::domain::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("malformed payload")]
    MalformedPayload,

    #[error("not found")]
    NotFound,

    #[error("internal error")]
    Internal(String),
}

/// JSON body of every error response that has one
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) => ApiError::NotFound,
            DomainError::InvalidInput(msg) | DomainError::Conflict(msg) => ApiError::Validation(msg),
            DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::MalformedPayload => StatusCode::BAD_REQUEST,
            // Not-found responses carry no body
            ApiError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(cause) => {
                error!("Request failed: {cause}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
