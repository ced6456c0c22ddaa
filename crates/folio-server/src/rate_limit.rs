//! Sliding-window rate limiting
//!
//! A durable backend can be plugged in through [`RateLimitBackend`]; when it
//! is absent or fails, the in-memory limiter answers instead.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::warn;
use crate::BoxFuture;

/// Distinct keys kept before empty windows are pruned
const PRUNE_THRESHOLD: usize = 10_000;

/// Outcome of a rate-limit check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: usize },
    Limited { retry_after: Duration },
}

impl RateDecision {
    /// Whole seconds to wait, rounded up and at least one
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            RateDecision::Allowed { .. } => None,
            RateDecision::Limited { retry_after } => {
                let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
                Some(secs.max(1))
            }
        }
    }
}

/// Errors from a durable backend.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limit backend unavailable: {0}")]
    Unavailable(String),
}

/// Shared limiter storage living outside this process
pub trait RateLimitBackend: Send + Sync {
    /// Record a hit for `key` and decide whether it is allowed
    fn hit<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<RateDecision, RateLimitError>>;
}

/// Per-key sliding window held in process memory
#[derive(Debug)]
pub struct MemoryRateLimiter {
    max: usize,
    window: Duration,
    hits: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl MemoryRateLimiter {
    pub fn new(max: usize, window: Duration) -> Self {
        Self {
            max,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }

    /// Record a hit at `now`. Rejected hits are not recorded.
    pub fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut hits = self.hits.lock().unwrap_or_else(PoisonError::into_inner);

        if hits.len() > PRUNE_THRESHOLD {
            let window = self.window;
            hits.retain(|_, times| times.back().is_some_and(|t| now.saturating_duration_since(*t) < window));
        }

        let times = hits.entry(key.to_string()).or_default();
        while times
            .front()
            .is_some_and(|t| now.saturating_duration_since(*t) >= self.window)
        {
            times.pop_front();
        }

        if times.len() >= self.max {
            let oldest = times.front().copied().unwrap_or(now);
            let retry_after = (oldest + self.window).saturating_duration_since(now);
            return RateDecision::Limited { retry_after };
        }

        times.push_back(now);
        RateDecision::Allowed {
            remaining: self.max - times.len(),
        }
    }
}

/// Limiter used by the contact route
pub struct RateLimiter {
    durable: Option<Arc<dyn RateLimitBackend>>,
    memory: MemoryRateLimiter,
}

impl RateLimiter {
    pub fn in_memory(max: usize, window: Duration) -> Self {
        Self {
            durable: None,
            memory: MemoryRateLimiter::new(max, window),
        }
    }

    /// Prefer `backend`, falling back to memory when it errors
    pub fn with_backend(mut self, backend: Arc<dyn RateLimitBackend>) -> Self {
        self.durable = Some(backend);
        self
    }

    pub async fn check(&self, key: &str) -> RateDecision {
        if let Some(backend) = &self.durable {
            match backend.hit(key).await {
                Ok(decision) => return decision,
                Err(e) => warn!(error = %e, "durable rate limiter failed, using in-memory fallback"),
            }
        }
        self.memory.check(key)
    }
}
