//! Domain services (business logic)

pub mod authorization;
pub mod company_service;
pub mod promotion_service;

#[cfg(test)]
mod scenarios;

pub use authorization::ApiKeyResolver;
pub use company_service::CompanyService;
pub use promotion_service::PromotionService;
