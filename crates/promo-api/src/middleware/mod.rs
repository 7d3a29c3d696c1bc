//! Request guards applied ahead of the handlers

pub mod api_key;
pub mod content_type;

pub use api_key::{require_api_key, AuthenticatedCompany};
pub use content_type::require_json_content_type;
