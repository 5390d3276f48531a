//! Rate limiting and session heartbeats over an explicit TTL store.
//!
//! State lives in a [`TtlStore`], never in process-local globals, so any
//! number of request handlers can share one backend.

pub mod limiter;
pub mod session;
pub mod store;

pub use limiter::{RateDecision, RateLimitPolicy, RateLimiter};
pub use session::SessionTracker;
pub use store::{Counter, MemoryStore, TtlStore};
