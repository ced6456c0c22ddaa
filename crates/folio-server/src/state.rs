//! Shared handler state

use std::sync::Arc;
use tracing::warn;
use crate::config::Config;
use crate::contact::{Mailer, ResendMailer, TurnstileVerifier, Verifier};
use crate::rate_limit::RateLimiter;
use crate::songs::{SymphoniaProbe, TrackProbe};

/// State cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub limiter: Arc<RateLimiter>,
    /// `None` until a verification secret is configured
    pub verifier: Option<Arc<dyn Verifier>>,
    /// `None` until a mail API key is configured
    pub mailer: Option<Arc<dyn Mailer>>,
    pub probe: Arc<dyn TrackProbe>,
}

impl AppState {
    /// State with no external providers; the contact route answers 500
    pub fn new(config: Config) -> Self {
        let limiter = RateLimiter::in_memory(config.rate_limit_max, config.rate_limit_window);
        Self {
            config: Arc::new(config),
            limiter: Arc::new(limiter),
            verifier: None,
            mailer: None,
            probe: Arc::new(SymphoniaProbe),
        }
    }

    /// State wired to Turnstile and Resend for whichever secrets are present
    pub fn from_config(config: Config) -> Self {
        let client = reqwest::Client::new();
        let verifier = config
            .turnstile_secret_key
            .clone()
            .map(|secret| Arc::new(TurnstileVerifier::new(client.clone(), secret)) as Arc<dyn Verifier>);
        let mailer = config
            .resend_api_key
            .clone()
            .map(|key| Arc::new(ResendMailer::new(client, key)) as Arc<dyn Mailer>);

        if verifier.is_none() || mailer.is_none() || config.contact_to_email.is_none() {
            warn!("contact form is not fully configured; submissions will fail with 500");
        }

        let mut state = Self::new(config);
        state.verifier = verifier;
        state.mailer = mailer;
        state
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn Verifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn with_probe(mut self, probe: Arc<dyn TrackProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = Arc::new(limiter);
        self
    }
}
