//! # Promo Security
//!
//! API key material: generation and log-safe fingerprints.

pub mod api_key;

pub use api_key::{fingerprint, generate_api_key};
