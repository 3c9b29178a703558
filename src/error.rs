use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Request shapes the engine refuses to run on
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Duplicate candidate id: {0}")]
    DuplicateCandidate(String),

    #[error("Too many candidates: {count} exceeds the limit of {limit}")]
    TooManyCandidates { count: usize, limit: usize },

    #[error("Roster has {0} members, a team holds at most 5")]
    RosterTooLarge(usize),
}

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Matching worker failed: {0}")]
    Worker(#[from] actix_web::error::BlockingError),
}

impl ServiceError {
    fn label(&self) -> &'static str {
        match self {
            ServiceError::InvalidJson(_) => "invalid_json",
            ServiceError::Validation(_) => "validation_failed",
            ServiceError::Request(_) => "unprocessable_request",
            ServiceError::Worker(_) => "internal_error",
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidJson(_) | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Request(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.label().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}
