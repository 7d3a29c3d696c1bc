//! PostgreSQL repository implementations

pub mod company_repo_impl;
pub mod promotion_repo_impl;

pub use company_repo_impl::PgCompanyRepository;
pub use promotion_repo_impl::PgPromotionRepository;

use promo_core::error::DomainError;
use tracing::error;

/// Client-facing field name for a unique constraint.
fn conflicting_field(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("companies_api_key_key") => "api_key",
        Some("companies_pkey") | Some("promotions_pkey") => "id",
        _ => "record",
    }
}

/// Unique violations become `AlreadyExists`; everything else is a database error.
pub(crate) fn map_db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::AlreadyExists(conflicting_field(db.constraint()).to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}
