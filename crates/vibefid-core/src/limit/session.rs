use super::store::TtlStore;
use crate::error::VibeError;
use crate::model::Fid;

/// Tracks which FIDs have an open session, refreshed by heartbeats.
///
/// A session is live while its heartbeat key is unexpired in the store.
#[derive(Debug)]
pub struct SessionTracker<S> {
    store: S,
    ttl_ms: i64,
}

impl<S: TtlStore> SessionTracker<S> {
    pub const fn new(store: S, ttl_ms: i64) -> Self {
        Self { store, ttl_ms }
    }

    fn key(fid: Fid) -> String {
        format!("session:{fid}")
    }

    /// Record a heartbeat, extending the session to `now_ms + ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] if the store fails.
    pub fn heartbeat(&self, fid: Fid, now_ms: i64) -> Result<(), VibeError> {
        self.store
            .set(&Self::key(fid), now_ms.to_string(), self.ttl_ms, now_ms)
    }

    /// Whether `fid` has a live session at `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] if the store fails.
    pub fn is_active(&self, fid: Fid, now_ms: i64) -> Result<bool, VibeError> {
        Ok(self.store.get(&Self::key(fid), now_ms)?.is_some())
    }

    /// Timestamp of the last heartbeat of a live session.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] if the store fails or holds a malformed value.
    pub fn last_seen(&self, fid: Fid, now_ms: i64) -> Result<Option<i64>, VibeError> {
        self.store
            .get(&Self::key(fid), now_ms)?
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| VibeError::Store(format!("malformed heartbeat for {fid}")))
            })
            .transpose()
    }

    /// End the session for `fid`.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Store`] if the store fails.
    pub fn end(&self, fid: Fid) -> Result<bool, VibeError> {
        self.store.remove(&Self::key(fid))
    }
}
