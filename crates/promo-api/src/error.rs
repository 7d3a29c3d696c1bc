use axum::{
    response::{IntoResponse, Response},
    Json,
};
use promo_core::DomainError;
use thiserror::Error;

use crate::response::{ApiResponse, ErrorCode};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(v) => ApiError::BadRequest(v.to_string()),
            DomainError::Unauthorized(a) => ApiError::Unauthorized(a.to_string()),
            DomainError::CompanyNotFound => ApiError::NotFound("Company not found".to_string()),
            DomainError::PromotionNotFound => ApiError::NotFound("Promotion not found".to_string()),
            DomainError::AlreadyExists(what) => ApiError::Conflict(format!("{} already exists", what)),
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Unauthorized(_) => ErrorCode::Unauthorized,
            ApiError::Forbidden(_) => ErrorCode::Forbidden,
            ApiError::NotFound(_) => ErrorCode::NotFound,
            ApiError::BadRequest(_) => ErrorCode::ValidationError,
            ApiError::Conflict(_) => ErrorCode::Conflict,
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => ErrorCode::InternalError,
        }
    }

    /// Text returned to the caller. Persistence details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg) => msg.clone(),
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            // The resolver already logged the rejected key's fingerprint
            ApiError::Unauthorized(msg) => tracing::debug!("Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => tracing::warn!("Forbidden: {}", msg),
            ApiError::NotFound(msg) => tracing::debug!("Not found: {}", msg),
            ApiError::BadRequest(msg) => tracing::debug!("Bad request: {}", msg),
            ApiError::Conflict(msg) => tracing::warn!("Conflict: {}", msg),
            ApiError::DatabaseError(msg) => tracing::error!("Database error: {}", msg),
            ApiError::InternalError(msg) => tracing::error!("Internal error: {}", msg),
        }

        (self.code().status(), Json(ApiResponse::failure(&self))).into_response()
    }
}
