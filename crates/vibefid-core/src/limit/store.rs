use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::VibeError;

/// Key-value store with per-key expiry.
///
/// Every call takes the current time in epoch milliseconds so that checks are
/// request-scoped and reproducible; an entry whose expiry is `<= now` is
/// treated as absent.
pub trait TtlStore: Send + Sync {
    /// Current value of `key`, if present and unexpired.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] when the backend is unavailable.
    fn get(&self, key: &str, now_ms: i64) -> Result<Option<String>, VibeError>;

    /// Set `key` to `value`, expiring `ttl_ms` after `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] when the backend is unavailable.
    fn set(&self, key: &str, value: String, ttl_ms: i64, now_ms: i64) -> Result<(), VibeError>;

    /// Increment a counter and return the new count.
    ///
    /// A missing or expired key starts at 1 with expiry `now_ms + ttl_ms`;
    /// an existing key keeps its original expiry.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] when the backend is unavailable or the
    /// stored value is not a counter.
    fn incr(&self, key: &str, ttl_ms: i64, now_ms: i64) -> Result<Counter, VibeError>;

    /// Remove `key`. Returns whether a live or expired entry existed.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] when the backend is unavailable.
    fn remove(&self, key: &str) -> Result<bool, VibeError>;

    /// Drop every expired entry, returning how many were dropped.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] when the backend is unavailable.
    fn purge_expired(&self, now_ms: i64) -> Result<usize, VibeError>;
}

/// Result of [`TtlStore::incr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub count: u64,
    pub expires_at_ms: i64,
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at_ms: i64,
}

impl Entry {
    const fn is_live(&self, now_ms: i64) -> bool {
        self.expires_at_ms > now_ms
    }
}

/// Writes between sweeps of expired entries in [`MemoryStore`].
pub const SWEEP_EVERY_WRITES: u64 = 256;

#[derive(Debug, Default)]
struct Entries {
    map: HashMap<String, Entry>,
    writes: u64,
}

impl Entries {
    fn insert(&mut self, key: &str, entry: Entry, now_ms: i64) {
        self.map.insert(key.to_string(), entry);
        self.writes += 1;
        if self.writes % SWEEP_EVERY_WRITES == 0 {
            self.sweep(now_ms);
        }
    }

    fn sweep(&mut self, now_ms: i64) -> usize {
        let before = self.map.len();
        self.map.retain(|_, entry| entry.is_live(now_ms));
        let dropped = before - self.map.len();
        if dropped > 0 {
            tracing::trace!(dropped, "swept expired store entries");
        }
        dropped
    }
}

/// In-process [`TtlStore`] guarded by a single mutex.
///
/// Expired entries are dropped every [`SWEEP_EVERY_WRITES`] writes, so keys
/// that never come back do not accumulate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Entries>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, VibeError> {
        Ok(self.lock()?.map.len())
    }

    /// # Errors
    ///
    /// Returns [`VibeError::Store`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, VibeError> {
        Ok(self.lock()?.map.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>, VibeError> {
        self.entries
            .lock()
            .map_err(|_| VibeError::Store("memory store lock poisoned".to_string()))
    }
}

impl TtlStore for MemoryStore {
    fn get(&self, key: &str, now_ms: i64) -> Result<Option<String>, VibeError> {
        let entries = self.lock()?;
        Ok(entries
            .map
            .get(key)
            .filter(|entry| entry.is_live(now_ms))
            .map(|entry| entry.value.clone()))
    }

    fn set(&self, key: &str, value: String, ttl_ms: i64, now_ms: i64) -> Result<(), VibeError> {
        let mut entries = self.lock()?;
        entries.insert(
            key,
            Entry {
                value,
                expires_at_ms: now_ms.saturating_add(ttl_ms),
            },
            now_ms,
        );
        Ok(())
    }

    fn incr(&self, key: &str, ttl_ms: i64, now_ms: i64) -> Result<Counter, VibeError> {
        let mut entries = self.lock()?;
        let counter = match entries.map.get(key).filter(|entry| entry.is_live(now_ms)) {
            Some(entry) => {
                let current = entry.value.parse::<u64>().map_err(|_| {
                    VibeError::Store(format!("value at {key} is not a counter"))
                })?;
                Counter {
                    count: current.saturating_add(1),
                    expires_at_ms: entry.expires_at_ms,
                }
            }
            None => Counter {
                count: 1,
                expires_at_ms: now_ms.saturating_add(ttl_ms),
            },
        };
        entries.insert(
            key,
            Entry {
                value: counter.count.to_string(),
                expires_at_ms: counter.expires_at_ms,
            },
            now_ms,
        );
        Ok(counter)
    }

    fn remove(&self, key: &str) -> Result<bool, VibeError> {
        Ok(self.lock()?.map.remove(key).is_some())
    }

    fn purge_expired(&self, now_ms: i64) -> Result<usize, VibeError> {
        Ok(self.lock()?.sweep(now_ms))
    }
}
