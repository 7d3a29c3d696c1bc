//! Rejects POST/PUT bodies that are not declared as JSON

use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, Method},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

fn is_json(value: &str) -> bool {
    value
        .split(';')
        .next()
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

pub async fn require_json_content_type(request: Request, next: Next) -> Result<Response, ApiError> {
    if matches!(*request.method(), Method::POST | Method::PUT) {
        let declared = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if !is_json(declared) {
            return Err(ApiError::BadRequest(
                "Content-Type must be application/json".to_string(),
            ));
        }
    }

    Ok(next.run(request).await)
}
