use serde::Serialize;
use tracing::warn;

use super::store::TtlStore;
use crate::error::VibeError;

/// Fixed-window limit: at most `max_requests` per `window_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitPolicy {
    pub max_requests: u64,
    pub window_ms: i64,
}

impl RateLimitPolicy {
    #[must_use]
    pub const fn new(max_requests: u64, window_ms: i64) -> Self {
        Self {
            max_requests,
            window_ms,
        }
    }
}

/// Outcome of an allowed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateDecision {
    pub count: u64,
    pub remaining: u64,
    pub reset_at_ms: i64,
}

/// Request-scoped rate limiter over a shared [`TtlStore`].
///
/// The counter lives in the store, not in the limiter, so separate processes
/// sharing one store enforce one limit.
#[derive(Debug)]
pub struct RateLimiter<S> {
    store: S,
    policy: RateLimitPolicy,
    namespace: String,
}

impl<S: TtlStore> RateLimiter<S> {
    pub fn new(store: S, policy: RateLimitPolicy, namespace: impl Into<String>) -> Self {
        Self {
            store,
            policy,
            namespace: namespace.into(),
        }
    }

    #[must_use]
    pub const fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn store_key(&self, key: &str) -> String {
        format!("ratelimit:{}:{key}", self.namespace)
    }

    /// Count one request for `key` at `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::RateLimited`] once `key` has used up its window,
    /// or [`VibeError::Store`] if the store fails.
    pub fn check(&self, key: &str, now_ms: i64) -> Result<RateDecision, VibeError> {
        let counter = self
            .store
            .incr(&self.store_key(key), self.policy.window_ms, now_ms)?;

        if counter.count > self.policy.max_requests {
            let retry_after_ms = (counter.expires_at_ms - now_ms).max(0);
            warn!(
                namespace = %self.namespace,
                key,
                count = counter.count,
                retry_after_ms,
                "rate limit exceeded"
            );
            return Err(VibeError::RateLimited {
                key: key.to_string(),
                retry_after_ms,
            });
        }

        Ok(RateDecision {
            count: counter.count,
            remaining: self.policy.max_requests - counter.count,
            reset_at_ms: counter.expires_at_ms,
        })
    }

    /// [`check`](Self::check) against the wall clock.
    ///
    /// # Errors
    ///
    /// Same as [`check`](Self::check).
    pub fn check_now(&self, key: &str) -> Result<RateDecision, VibeError> {
        self.check(key, chrono::Utc::now().timestamp_millis())
    }

    /// Forget the window for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] if the store fails.
    pub fn reset(&self, key: &str) -> Result<(), VibeError> {
        self.store.remove(&self.store_key(key)).map(|_| ())
    }
}
