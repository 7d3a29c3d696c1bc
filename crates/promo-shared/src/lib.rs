//! # Promo Shared
//!
//! Shared configuration, telemetry, and pagination types for the promotions service.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
