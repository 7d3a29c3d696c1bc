pub mod companies;
pub mod health;
pub mod promotions;

use uuid::Uuid;

use crate::error::ApiError;

/// Path ids arrive as strings so a malformed one maps to our own 400 body.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest("Invalid ID format".to_string()))
}
