//! Contact form endpoint
//!
//! `POST /api/contact` runs: rate limit, parse and validate, configuration
//! check, token verification, then email delivery. Each step can end the
//! request with its own [`ApiError`].

mod email;
mod form;
mod mailer;
mod verify;

use std::net::SocketAddr;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{Extensions, HeaderMap};
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info, warn};
use crate::error::ApiError;
use crate::rate_limit::RateDecision;
use crate::state::AppState;

pub use email::{build_email, escape_html, EmailPayload};
pub use form::{validate_email, ContactForm, ContactRequest, Subject};
pub use mailer::{MailError, Mailer, ResendMailer, RESEND_EMAILS_URL};
pub use verify::{TurnstileVerifier, Verification, Verifier, VerifyError, TURNSTILE_VERIFY_URL};

/// Key used for rate limiting.
///
/// The peer address is used unless `trust_proxy` is set, in which case the
/// first `X-Forwarded-For` entry or `X-Real-IP` wins.
pub fn client_key(headers: &HeaderMap, extensions: &Extensions, trust_proxy: bool) -> String {
    let peer = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());
    if !trust_proxy {
        return peer.unwrap_or_else(|| "unknown".to_string());
    }

    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(ip) = real_ip {
        return ip.to_string();
    }

    peer.unwrap_or_else(|| "unknown".to_string())
}

/// `POST /api/contact`
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let client = client_key(&headers, &extensions, state.config.trust_proxy_headers);

    if let decision @ RateDecision::Limited { .. } = state.limiter.check(&client).await {
        warn!(client = %client, "contact form rate limited");
        return Err(ApiError::RateLimited {
            retry_after_secs: decision.retry_after_secs().unwrap_or(1),
        });
    }

    let form: ContactForm =
        serde_json::from_slice(&body).map_err(|_| ApiError::Validation("Invalid request body.".to_string()))?;
    let request = form.validate()?;

    let (Some(verifier), Some(mailer), Some(to)) = (
        state.verifier.as_ref(),
        state.mailer.as_ref(),
        state.config.contact_to_email.as_deref(),
    ) else {
        error!("contact form is missing its verifier, mailer or recipient configuration");
        return Err(ApiError::Misconfigured);
    };

    let verification = verifier
        .verify(&request.verification_token, Some(&client))
        .await
        .map_err(|e| {
            error!(error = %e, "verification provider unreachable");
            ApiError::Delivery("Could not verify the request. Please try again.".to_string())
        })?;
    if !verification.success {
        warn!(client = %client, codes = ?verification.error_codes, "verification rejected");
        return Err(ApiError::Verification {
            codes: verification.error_codes,
        });
    }

    let email = build_email(&request, &state.config.contact_from_email, to);
    let id = mailer.send(&email).await.map_err(|e| {
        error!(error = %e, "failed to send contact email");
        ApiError::Delivery("Failed to send message. Please try again later.".to_string())
    })?;

    info!(id = %id, subject = request.subject.label(), "contact email sent");
    Ok(Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer(ip: [u8; 4]) -> Extensions {
        let mut extensions = Extensions::new();
        extensions.insert(ConnectInfo(SocketAddr::from((ip, 5555))));
        extensions
    }

    fn forwarded_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        headers
    }

    #[test]
    fn test_client_key_ignores_forwarding_headers_by_default() {
        assert_eq!(client_key(&forwarded_headers(), &peer([192, 0, 2, 1]), false), "192.0.2.1");
        assert_eq!(client_key(&forwarded_headers(), &Extensions::new(), false), "unknown");
    }

    #[test]
    fn test_client_key_behind_trusted_proxy() {
        assert_eq!(client_key(&forwarded_headers(), &peer([10, 0, 0, 1]), true), "203.0.113.7");

        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(client_key(&headers, &peer([10, 0, 0, 1]), true), "198.51.100.2");
        assert_eq!(client_key(&HeaderMap::new(), &peer([192, 0, 2, 1]), true), "192.0.2.1");
    }
}
