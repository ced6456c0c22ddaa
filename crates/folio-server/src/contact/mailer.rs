//! Transactional email delivery

use serde::Deserialize;
use tracing::debug;
use crate::BoxFuture;
use super::EmailPayload;

/// Resend send-email endpoint
pub const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";

/// Errors delivering an email.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The provider could not be reached or answered garbage.
    #[error("mail request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider refused the message.
    #[error("mail provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a prepared email, returning the provider's message id
pub trait Mailer: Send + Sync {
    fn send<'a>(&'a self, email: &'a EmailPayload) -> BoxFuture<'a, Result<String, MailError>>;
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: String,
}

/// Resend API client
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl ResendMailer {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            url: RESEND_EMAILS_URL.to_string(),
        }
    }
}

impl Mailer for ResendMailer {
    fn send<'a>(&'a self, email: &'a EmailPayload) -> BoxFuture<'a, Result<String, MailError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.url)
                .bearer_auth(&self.api_key)
                .json(email)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(MailError::Rejected {
                    status: status.as_u16(),
                    body,
                });
            }

            let sent: SendResponse = response.json().await?;
            debug!(id = %sent.id, "email accepted by provider");
            Ok(sent.id)
        })
    }
}
