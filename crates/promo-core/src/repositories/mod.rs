//! Repository traits (ports)

pub mod company_repository;
pub mod promotion_repository;
#[cfg(any(test, feature = "testing"))]
pub mod memory;

pub use company_repository::CompanyRepository;
pub use promotion_repository::PromotionRepository;
#[cfg(any(test, feature = "testing"))]
pub use memory::{InMemoryCompanyRepository, InMemoryPromotionRepository};
