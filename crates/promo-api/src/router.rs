// ============================================================================
// Promo API - Router
// File: crates/promo-api/src/router.rs
// ============================================================================

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handlers::{companies, health, promotions};
use crate::middleware::{require_api_key, require_json_content_type};
use crate::state::AppState;

pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    // Public routes (no API key)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/companies", post(companies::create_company));

    // Protected routes (X-API-Key resolved to a tenant)
    let protected_routes = Router::new()
        .route("/companies", get(companies::list_companies))
        .route(
            "/companies/{id}",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::deactivate_company),
        )
        .route("/companies/{id}/rotate-api-key", post(companies::rotate_api_key))
        .route("/companies/cnpj/{cnpj}", get(companies::get_company_by_cnpj))
        .route(
            "/promotions",
            post(promotions::create_promotion).get(promotions::list_promotions),
        )
        .route("/promotions/coupon", get(promotions::find_by_coupon))
        .route(
            "/promotions/{id}",
            get(promotions::get_promotion)
                .put(promotions::update_promotion)
                .delete(promotions::delete_promotion),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(require_json_content_type))
        .layer(CorsLayer::permissive())
        // Dropping the handler future cancels its in-flight queries
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        // Headers stay out of spans: X-API-Key must never be logged
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
