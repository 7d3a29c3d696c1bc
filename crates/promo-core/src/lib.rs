//! # Promo Core
//!
//! Domain entities, repository ports, and the lifecycle services that
//! enforce the company and promotion invariants.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{AuthError, DomainError, ValidationError};
