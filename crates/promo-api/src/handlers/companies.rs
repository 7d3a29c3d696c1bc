// ============================================================================
// Promo API - Company Handlers
// File: crates/promo-api/src/handlers/companies.rs
// ============================================================================
//! Company HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::parse_id;
use crate::dto::{
    CompanyDto, CreateCompanyRequest, CreatedCompanyDto, PageQuery, RotatedKeyDto,
    UpdateCompanyRequest, ValidatedJson,
};
use crate::error::ApiError;
use crate::middleware::AuthenticatedCompany;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Mutations are only allowed on the caller's own company.
fn ensure_own(tenant: &AuthenticatedCompany, id: &Uuid) -> Result<(), ApiError> {
    if tenant.0.id != *id {
        tracing::warn!(company_id = %tenant.0.id, target = %id, "Cross-tenant company mutation");
        return Err(ApiError::Forbidden(
            "Cannot modify another company".to_string(),
        ));
    }
    Ok(())
}

/// POST /companies
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedCompanyDto>>), ApiError> {
    let company = state.companies.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(company.into()))))
}

/// GET /companies
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<CompanyDto>>>, ApiError> {
    let companies = state.companies.list(query.into()).await?;
    Ok(Json(ApiResponse::ok(
        companies.into_iter().map(CompanyDto::from).collect(),
    )))
}

/// GET /companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CompanyDto>>, ApiError> {
    let id = parse_id(&id)?;
    let company = state.companies.get(&id).await?;
    Ok(Json(ApiResponse::ok(company.into())))
}

/// GET /companies/cnpj/{cnpj}
pub async fn get_company_by_cnpj(
    State(state): State<AppState>,
    Path(cnpj): Path<String>,
) -> Result<Json<ApiResponse<CompanyDto>>, ApiError> {
    let company = state.companies.get_by_cnpj(&cnpj).await?;
    Ok(Json(ApiResponse::ok(company.into())))
}

/// PUT /companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    tenant: AuthenticatedCompany,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyDto>>, ApiError> {
    let id = parse_id(&id)?;
    ensure_own(&tenant, &id)?;

    let current = state.companies.get(&id).await?;
    let updated = state.companies.update(payload.apply_to(current)).await?;
    Ok(Json(ApiResponse::ok(updated.into())))
}

/// DELETE /companies/{id}
pub async fn deactivate_company(
    State(state): State<AppState>,
    tenant: AuthenticatedCompany,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    ensure_own(&tenant, &id)?;

    state.companies.deactivate(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /companies/{id}/rotate-api-key
pub async fn rotate_api_key(
    State(state): State<AppState>,
    tenant: AuthenticatedCompany,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RotatedKeyDto>>, ApiError> {
    let id = parse_id(&id)?;
    ensure_own(&tenant, &id)?;

    let api_key = state.companies.rotate_api_key(&id).await?;
    Ok(Json(ApiResponse::ok(RotatedKeyDto { api_key })))
}
