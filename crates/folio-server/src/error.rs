//! API error taxonomy
//!
//! Every error renders as `{"ok": false, "error": "<message>"}` with the
//! status code of its kind.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors returned by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed request fields.
    #[error("{0}")]
    Validation(String),

    /// Client exceeded the request budget.
    #[error("Too many requests. Please try again later.")]
    RateLimited { retry_after_secs: u64 },

    /// The anti-abuse token was rejected.
    #[error("Verification failed{}", format_codes(.codes))]
    Verification { codes: Vec<String> },

    /// A required secret or address is missing. The message never names it.
    #[error("The server is not configured to send messages.")]
    Misconfigured,

    /// A downstream provider failed.
    #[error("{0}")]
    Delivery(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

fn format_codes(codes: &[String]) -> String {
    if codes.is_empty() {
        String::new()
    } else {
        format!(": {}", codes.join(", "))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Verification { .. } => StatusCode::BAD_REQUEST,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Misconfigured | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Delivery(_) => StatusCode::BAD_GATEWAY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "ok": false, "error": self.to_string() }));
        let mut response = (self.status(), body).into_response();

        if let ApiError::RateLimited { retry_after_secs } = self {
            if let Ok(value) = HeaderValue::from_str(&retry_after_secs.max(1).to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::RateLimited { retry_after_secs: 3 }.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(ApiError::Verification { codes: vec![] }.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Misconfigured.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Delivery("x".into()).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_verification_message_lists_codes() {
        let err = ApiError::Verification {
            codes: vec!["timeout-or-duplicate".into(), "invalid-input-response".into()],
        };
        assert_eq!(err.to_string(), "Verification failed: timeout-or-duplicate, invalid-input-response");
        assert_eq!(ApiError::Verification { codes: vec![] }.to_string(), "Verification failed");
    }

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let response = ApiError::RateLimited { retry_after_secs: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "42");
    }
}
