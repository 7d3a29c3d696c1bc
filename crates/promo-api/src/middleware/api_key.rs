// ============================================================================
// Promo API - API Key Middleware
// File: crates/promo-api/src/middleware/api_key.rs
// ============================================================================
//! Resolves `X-API-Key` to a tenant and stores it in the request extensions.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use promo_core::domain::Company;
use promo_core::AuthError;
use promo_shared::constants::API_KEY_HEADER;

use crate::error::ApiError;
use crate::state::AppState;

/// The company that owns the presented API key
#[derive(Debug, Clone)]
pub struct AuthenticatedCompany(pub Company);

pub async fn require_api_key(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let api_key = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let company = state.resolver.resolve(&api_key).await?;

    request.extensions_mut().insert(AuthenticatedCompany(company));
    Ok(next.run(request).await)
}

impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedCompany {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only reachable on routes mounted behind `require_api_key`
        parts
            .extensions
            .get::<AuthenticatedCompany>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized(AuthError::Missing.to_string()))
    }
}
