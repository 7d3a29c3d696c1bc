//! Extractors for query strings and validated JSON bodies

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use promo_shared::Pagination;
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::error::ApiError;

/// `?limit=&offset=` kept as raw strings so unparseable values fall back to defaults
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<PageQuery> for Pagination {
    fn from(q: PageQuery) -> Self {
        Pagination::parse(q.limit.as_deref(), q.offset.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CouponQuery {
    #[serde(default)]
    pub coupon: String,
}

/// JSON body that has passed its `Validate` rules
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid input: {}", e.body_text())))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
