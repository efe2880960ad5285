//! Resilient call client: retry with exponential backoff and call pacing
//!
//! Every call through a [`ResilientClient`] is spaced at least
//! `min_spacing` after the previous one, across all callers sharing the
//! instance. Failed attempts are retried up to `max_attempts` in total;
//! rate-limit signals wait the provider-indicated delay.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::{ApiError, ApiResult};

/// Text returned to callers once every attempt has failed
pub const UNAVAILABLE_MARKER: &str = "AI service unavailable after retries";

/// Retry and pacing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Unit of the exponential backoff
    pub backoff_base: Duration,
    /// Minimum spacing between successive dispatches
    pub min_spacing: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_secs(1),
            min_spacing: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Wait after the `attempt`-th (1-based) generic failure: `base * 2^attempt`
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base * 2u32.saturating_pow(attempt)
    }

    /// Wait after a rate-limited attempt with no provider hint: `base * (2^attempt + 1)`
    pub fn rate_limit_fallback(&self, attempt: u32) -> Duration {
        self.backoff_base * 2u32.saturating_pow(attempt).saturating_add(1)
    }
}

/// How a failed attempt should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Provider asked us to slow down, optionally saying for how long
    RateLimited(Option<Duration>),
    /// Worth retrying after backoff
    Transient,
    /// Retrying cannot help (bad credentials, malformed request)
    Fatal,
}

/// Rate-limit detector and retry classifier
pub type FailureClassifier = fn(&ApiError) -> Failure;

/// Default classification of provider errors
pub fn classify(err: &ApiError) -> Failure {
    match err {
        ApiError::RateLimit(delay) if delay.is_zero() => Failure::RateLimited(None),
        ApiError::RateLimit(delay) => Failure::RateLimited(Some(*delay)),
        ApiError::Unauthorized | ApiError::Forbidden | ApiError::BadRequest(_) => Failure::Fatal,
        _ => Failure::Transient,
    }
}

/// Parse a `Retry-After` header given in seconds
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(Duration::from_secs_f64)
}

/// Outcome of a resilient call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text produced by the provider
    Text(String),
    /// Every attempt failed
    Unavailable,
}

impl Reply {
    /// Provider text, if any
    pub fn text(self) -> Option<String> {
        match self {
            Reply::Text(text) => Some(text),
            Reply::Unavailable => None,
        }
    }

    /// Provider text, or [`UNAVAILABLE_MARKER`]
    pub fn into_text(self) -> String {
        self.text()
            .unwrap_or_else(|| UNAVAILABLE_MARKER.to_string())
    }
}

/// Minimum-spacing gate shared by every call through one client
struct Pacer {
    min_spacing: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl Pacer {
    fn new(min_spacing: Duration) -> Self {
        Self {
            min_spacing,
            last_call: Mutex::new(None),
        }
    }

    /// Wait until `min_spacing` has passed since the previous dispatch.
    ///
    /// The lock is held across the sleep so concurrent callers queue up.
    async fn wait_turn(&self) {
        let mut last = self.last_call.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_spacing {
                let wait = self.min_spacing - elapsed;
                debug!("Pacing: waiting {:?} before next call", wait);
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Retrying, paced wrapper around a single outbound call.
pub struct ResilientClient {
    policy: RetryPolicy,
    classify: FailureClassifier,
    pacer: Pacer,
}

impl Default for ResilientClient {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

impl ResilientClient {
    /// Create a client with the default failure classifier.
    pub fn new(policy: RetryPolicy) -> Self {
        Self::with_classifier(policy, classify)
    }

    /// Create a client with a custom rate-limit detector.
    pub fn with_classifier(policy: RetryPolicy, classify: FailureClassifier) -> Self {
        let pacer = Pacer::new(policy.min_spacing);
        Self {
            policy,
            classify,
            pacer,
        }
    }

    /// Run `op` with pacing and retries. Never fails: after the final failed
    /// attempt the result is [`Reply::Unavailable`].
    pub async fn call<F, Fut>(&self, label: &str, op: F) -> Reply
    where
        F: Fn() -> Fut,
        Fut: Future<Output = ApiResult<String>>,
    {
        match self.execute(label, op).await {
            Ok(text) => Reply::Text(text),
            Err(err) => {
                warn!("All attempts for {} failed: {}", label, err);
                Reply::Unavailable
            }
        }
    }

    async fn execute<F, Fut>(&self, label: &str, op: F) -> ApiResult<String>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = ApiResult<String>>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            self.pacer.wait_turn().await;

            let err = match op().await {
                Ok(text) => return Ok(text),
                Err(err) => err,
            };

            if attempt >= max_attempts {
                return Err(err);
            }

            let delay = match (self.classify)(&err) {
                Failure::Fatal => return Err(err),
                Failure::RateLimited(hint) => {
                    let delay = hint.unwrap_or_else(|| self.policy.rate_limit_fallback(attempt));
                    warn!(
                        "{} rate limited, waiting {:?} before retry {}/{}",
                        label,
                        delay,
                        attempt + 1,
                        max_attempts
                    );
                    delay
                }
                Failure::Transient => {
                    let delay = self.policy.backoff(attempt);
                    warn!(
                        "{} attempt {} failed: {}; retrying in {:?}",
                        label, attempt, err, delay
                    );
                    delay
                }
            };

            tokio::time::sleep(delay).await;
        }
    }
}
