use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::debug;
use serde::Serialize;
use thiserror::Error;

/// The first rule an entity broke, in the order the rules are checked.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("description exceeds 200 characters")]
    DescriptionTooLong,
    #[error("duration must be positive")]
    NonPositiveDuration,
    #[error("release date predates cinema")]
    ReleaseDateTooEarly,
    #[error("email must contain '@'")]
    InvalidEmail,
    #[error("login must be non-empty and contain no spaces")]
    InvalidLogin,
    #[error("birthday cannot be in the future")]
    BirthdayInFuture,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: u64 },
    #[error("{kind} id {id} is already taken")]
    IdTaken { kind: &'static str, id: u64 },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::IdTaken { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        debug!("{:?}", self);
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
