// ============================================================================
// Promo API - Promotion Handlers
// File: crates/promo-api/src/handlers/promotions.rs
// ============================================================================
//! Promotion HTTP handlers. Every route acts on the authenticated tenant.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::dto::{CouponQuery, PageQuery, PromotionDto, PromotionRequest, ValidatedJson};
use crate::error::ApiError;
use crate::middleware::AuthenticatedCompany;
use crate::response::ApiResponse;
use crate::state::AppState;

fn to_dtos(promotions: Vec<promo_core::domain::Promotion>) -> Vec<PromotionDto> {
    promotions.into_iter().map(PromotionDto::from).collect()
}

/// POST /promotions
pub async fn create_promotion(
    State(state): State<AppState>,
    AuthenticatedCompany(tenant): AuthenticatedCompany,
    ValidatedJson(payload): ValidatedJson<PromotionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PromotionDto>>), ApiError> {
    let promotion = state.promotions.create(&tenant, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(promotion.into()))))
}

/// GET /promotions
pub async fn list_promotions(
    State(state): State<AppState>,
    AuthenticatedCompany(tenant): AuthenticatedCompany,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<PromotionDto>>>, ApiError> {
    let promotions = state.promotions.list(&tenant, query.into()).await?;
    Ok(Json(ApiResponse::ok(to_dtos(promotions))))
}

/// GET /promotions/{id}
pub async fn get_promotion(
    State(state): State<AppState>,
    AuthenticatedCompany(tenant): AuthenticatedCompany,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PromotionDto>>, ApiError> {
    let id = parse_id(&id)?;
    let promotion = state.promotions.get(&tenant, &id).await?;
    Ok(Json(ApiResponse::ok(promotion.into())))
}

/// GET /promotions/coupon?coupon=
pub async fn find_by_coupon(
    State(state): State<AppState>,
    AuthenticatedCompany(tenant): AuthenticatedCompany,
    Query(query): Query<CouponQuery>,
) -> Result<Json<ApiResponse<Vec<PromotionDto>>>, ApiError> {
    let promotions = state.promotions.find_by_coupon(&tenant, &query.coupon).await?;
    Ok(Json(ApiResponse::ok(to_dtos(promotions))))
}

/// PUT /promotions/{id}
pub async fn update_promotion(
    State(state): State<AppState>,
    AuthenticatedCompany(tenant): AuthenticatedCompany,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<PromotionRequest>,
) -> Result<Json<ApiResponse<PromotionDto>>, ApiError> {
    let id = parse_id(&id)?;
    let promotion = state.promotions.update(&tenant, &id, payload.into()).await?;
    Ok(Json(ApiResponse::ok(promotion.into())))
}

/// DELETE /promotions/{id}
pub async fn delete_promotion(
    State(state): State<AppState>,
    AuthenticatedCompany(tenant): AuthenticatedCompany,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.promotions.delete(&tenant, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
