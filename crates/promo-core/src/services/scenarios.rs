//! End-to-end flows across the resolver and both lifecycle services

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use promo_shared::Pagination;

use crate::domain::{DiscountType, NewCompany, PromotionDraft};
use crate::error::{AuthError, DomainError, ValidationError};
use crate::repositories::{InMemoryCompanyRepository, InMemoryPromotionRepository};
use crate::services::{ApiKeyResolver, CompanyService, PromotionService};

struct Harness {
    companies: Arc<InMemoryCompanyRepository>,
    promotions: Arc<InMemoryPromotionRepository>,
    resolver: ApiKeyResolver<InMemoryCompanyRepository>,
    company_service: CompanyService<InMemoryCompanyRepository>,
    promotion_service: PromotionService<InMemoryPromotionRepository>,
}

fn harness() -> Harness {
    let companies = Arc::new(InMemoryCompanyRepository::new());
    let promotions = Arc::new(InMemoryPromotionRepository::new());
    Harness {
        resolver: ApiKeyResolver::new(companies.clone()),
        company_service: CompanyService::new(companies.clone()),
        promotion_service: PromotionService::new(promotions.clone()),
        companies,
        promotions,
    }
}

fn draft(coupon: Option<&str>) -> PromotionDraft {
    PromotionDraft {
        title: "Launch".to_string(),
        description: None,
        discount_type: DiscountType::Percentage,
        discount_value: 10.0,
        start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
        minimum_purchase_amount: None,
        max_usage: Some(3),
        current_usage: None,
        coupon_code: coupon.map(str::to_string),
        is_active: true,
    }
}

#[tokio::test]
async fn deactivated_company_key_fails_like_unknown_key() {
    let h = harness();
    let company = h.company_service.create(NewCompany::new("Acme", "123")).await.unwrap();

    assert!(company.is_active);
    assert!(!company.api_key.is_empty());
    assert!(company.deleted_at.is_none());
    assert_eq!(h.resolver.resolve(&company.api_key).await.unwrap().id, company.id);

    h.company_service.deactivate(&company.id).await.unwrap();

    let raw = h.companies.raw(&company.id).unwrap();
    assert!(!raw.is_active);
    assert!(raw.deleted_at.is_some());

    let after = h.resolver.resolve(&company.api_key).await.unwrap_err();
    let unknown = h.resolver.resolve("pk_never_issued").await.unwrap_err();
    assert_eq!(after, DomainError::Unauthorized(AuthError::InvalidOrInactive));
    assert_eq!(after, unknown);

    // Deactivating twice is harmless; the row stays hidden.
    h.company_service.deactivate(&company.id).await.unwrap();
    assert_eq!(h.company_service.get(&company.id).await.unwrap_err(), DomainError::CompanyNotFound);
}

#[tokio::test]
async fn rotation_invalidates_previous_keys() {
    let h = harness();
    let company = h.company_service.create(NewCompany::new("Acme", "123")).await.unwrap();
    let original = company.api_key.clone();

    let first = h.company_service.rotate_api_key(&company.id).await.unwrap();
    assert_ne!(first, original);
    assert!(h.resolver.resolve(&original).await.is_err());
    assert_eq!(h.resolver.resolve(&first).await.unwrap().id, company.id);

    let second = h.company_service.rotate_api_key(&company.id).await.unwrap();
    assert_ne!(second, first);
    assert_eq!(
        h.resolver.resolve(&first).await.unwrap_err(),
        DomainError::Unauthorized(AuthError::InvalidOrInactive)
    );
    assert_eq!(h.resolver.resolve(&second).await.unwrap().id, company.id);
}

#[tokio::test]
async fn update_cannot_resurrect_soft_deleted_company() {
    let h = harness();
    let company = h.company_service.create(NewCompany::new("Acme", "123")).await.unwrap();
    h.company_service.deactivate(&company.id).await.unwrap();

    let mut revived = company.clone();
    revived.is_active = true;
    assert_eq!(h.company_service.update(revived).await.unwrap_err(), DomainError::CompanyNotFound);
    assert!(h.companies.raw(&company.id).unwrap().deleted_at.is_some());

    assert_eq!(
        h.company_service.rotate_api_key(&company.id).await.unwrap_err(),
        DomainError::CompanyNotFound
    );
}

#[tokio::test]
async fn inverted_promotion_window_persists_nothing() {
    let h = harness();
    let company = h.company_service.create(NewCompany::new("Acme", "123")).await.unwrap();

    let mut bad = draft(None);
    bad.start_date = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
    bad.end_date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let err = h.promotion_service.create(&company, bad).await.unwrap_err();
    assert_eq!(err, DomainError::Validation(ValidationError::DateRange));
    assert!(h.promotions.is_empty());
}

#[tokio::test]
async fn coupon_lookup_is_case_insensitive_substring() {
    let h = harness();
    let company = h.company_service.create(NewCompany::new("Acme", "123")).await.unwrap();

    h.promotion_service.create(&company, draft(Some("SAVE20"))).await.unwrap();
    h.promotion_service.create(&company, draft(Some("welcome"))).await.unwrap();
    h.promotion_service.create(&company, draft(None)).await.unwrap();

    let found = h.promotion_service.find_by_coupon(&company, "SAVE").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].coupon_code.as_deref(), Some("SAVE20"));

    let found = h.promotion_service.find_by_coupon(&company, "ave2").await.unwrap();
    assert_eq!(found.len(), 1);

    assert!(h.promotion_service.find_by_coupon(&company, "nothing").await.unwrap().is_empty());
    assert!(h.promotion_service.find_by_coupon(&company, "").await.is_err());
}

#[tokio::test]
async fn promotions_are_invisible_to_other_tenants() {
    let h = harness();
    let acme = h.company_service.create(NewCompany::new("Acme", "123")).await.unwrap();
    let globex = h.company_service.create(NewCompany::new("Globex", "456")).await.unwrap();

    let promo = h.promotion_service.create(&acme, draft(Some("SAVE20"))).await.unwrap();

    assert_eq!(
        h.promotion_service.get(&globex, &promo.id).await.unwrap_err(),
        DomainError::PromotionNotFound
    );
    assert!(h.promotion_service.find_by_coupon(&globex, "SAVE").await.unwrap().is_empty());
    assert!(h.promotion_service.list(&globex, Pagination::default()).await.unwrap().is_empty());

    h.promotion_service.delete(&globex, &promo.id).await.unwrap();
    assert_eq!(h.promotion_service.get(&acme, &promo.id).await.unwrap().id, promo.id);
}

#[tokio::test]
async fn delete_is_terminal_and_idempotent() {
    let h = harness();
    let company = h.company_service.create(NewCompany::new("Acme", "123")).await.unwrap();
    let promo = h.promotion_service.create(&company, draft(None)).await.unwrap();

    h.promotion_service.delete(&company, &promo.id).await.unwrap();
    h.promotion_service.delete(&company, &promo.id).await.unwrap();

    assert_eq!(
        h.promotion_service.get(&company, &promo.id).await.unwrap_err(),
        DomainError::PromotionNotFound
    );
    assert_eq!(
        h.promotion_service.update(&company, &promo.id, draft(None)).await.unwrap_err(),
        DomainError::PromotionNotFound
    );
}

#[tokio::test]
async fn pagination_defaults_match_explicit_defaults() {
    let h = harness();
    let company = h.company_service.create(NewCompany::new("Acme", "0")).await.unwrap();
    for i in 1..=12 {
        h.company_service
            .create(NewCompany::new(format!("Company {i}"), format!("{i}")))
            .await
            .unwrap();
        h.promotion_service.create(&company, draft(None)).await.unwrap();
    }

    let defaulted = h.company_service.list(Pagination::new(Some(0), Some(-5))).await.unwrap();
    let explicit = h.company_service.list(Pagination::new(Some(10), Some(0))).await.unwrap();
    assert_eq!(defaulted.len(), 10);
    assert_eq!(defaulted, explicit);

    let defaulted = h.promotion_service.list(&company, Pagination::new(None, Some(-1))).await.unwrap();
    let explicit = h.promotion_service.list(&company, Pagination::new(Some(10), Some(0))).await.unwrap();
    assert_eq!(defaulted, explicit);

    let tail = h.promotion_service.list(&company, Pagination::new(Some(10), Some(10))).await.unwrap();
    assert_eq!(tail.len(), 2);
}
