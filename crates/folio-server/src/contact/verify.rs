//! Anti-abuse token verification

use serde::Deserialize;
use tracing::debug;
use crate::BoxFuture;

/// Cloudflare Turnstile verification endpoint
pub const TURNSTILE_VERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Provider verdict on a token
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Verification {
    pub success: bool,
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

/// Errors reaching the verification provider.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("verification request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Checks a client-supplied challenge token
pub trait Verifier: Send + Sync {
    fn verify<'a>(&'a self, token: &'a str, remote_ip: Option<&'a str>) -> BoxFuture<'a, Result<Verification, VerifyError>>;
}

/// Turnstile siteverify client
pub struct TurnstileVerifier {
    client: reqwest::Client,
    secret: String,
    url: String,
}

impl TurnstileVerifier {
    pub fn new(client: reqwest::Client, secret: impl Into<String>) -> Self {
        Self {
            client,
            secret: secret.into(),
            url: TURNSTILE_VERIFY_URL.to_string(),
        }
    }
}

impl Verifier for TurnstileVerifier {
    fn verify<'a>(&'a self, token: &'a str, remote_ip: Option<&'a str>) -> BoxFuture<'a, Result<Verification, VerifyError>> {
        Box::pin(async move {
            let mut form = vec![("secret", self.secret.as_str()), ("response", token)];
            if let Some(ip) = remote_ip {
                form.push(("remoteip", ip));
            }

            let verification: Verification = self
                .client
                .post(&self.url)
                .form(&form)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            debug!(success = verification.success, codes = ?verification.error_codes, "turnstile verdict");
            Ok(verification)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_response() {
        let ok: Verification = serde_json::from_str(r#"{"success":true,"error-codes":[],"hostname":"example.com"}"#).unwrap();
        assert!(ok.success);

        let failed: Verification =
            serde_json::from_str(r#"{"success":false,"error-codes":["invalid-input-response"]}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.error_codes, vec!["invalid-input-response".to_string()]);

        let bare: Verification = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(bare.error_codes.is_empty());
    }
}
