//! Folio OS Server
//!
//! The thin server side of the portfolio:
//!
//! - **Contact**: validated form submissions, rate limited per client,
//!   verified with Turnstile and delivered through Resend
//! - **Songs**: audio directory listing with tag metadata and cover art
//! - **Static**: the built site and raw song files
//!
//! Every API error renders as `{"ok": false, "error": "..."}`; see
//! [`error::ApiError`] for the status mapping.

pub mod config;
pub mod contact;
pub mod error;
pub mod rate_limit;
pub mod routes;
pub mod songs;
pub mod state;

use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by provider traits
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// Convenient re-exports at crate root
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use rate_limit::{MemoryRateLimiter, RateDecision, RateLimitBackend, RateLimitError, RateLimiter};
pub use routes::{app, with_layers};
pub use state::AppState;
