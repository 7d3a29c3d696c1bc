//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("start_date cannot be after end_date")]
    DateRange,

    #[error("discount_value must be greater than zero")]
    DiscountValue,
}

/// Both variants surface as the same generic unauthorized response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("API key required")]
    Missing,

    #[error("Invalid or inactive API key")]
    InvalidOrInactive,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    #[error("Company not found")]
    CompanyNotFound,

    #[error("Promotion not found")]
    PromotionNotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
