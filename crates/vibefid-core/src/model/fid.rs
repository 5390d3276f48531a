use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::VibeError;

/// Largest integer every consumer of the trait generator represents exactly.
pub const MAX_FID: u64 = (1 << 53) - 1;

/// A validated Farcaster identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Fid(u64);

impl Fid {
    /// Build a FID, rejecting values above [`MAX_FID`].
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::InvalidFid`] when `value` exceeds [`MAX_FID`].
    pub fn new(value: u64) -> Result<Self, VibeError> {
        if value > MAX_FID {
            return Err(VibeError::InvalidFid {
                value: value.to_string(),
                reason: "exceeds 2^53 - 1",
            });
        }
        Ok(Self(value))
    }

    /// Build a FID from a JSON-style number.
    ///
    /// # Errors
    ///
    /// Rejects NaN, infinities, negative and fractional values, and values
    /// above [`MAX_FID`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_from_f64(value: f64) -> Result<Self, VibeError> {
        let reason = if !value.is_finite() {
            Some("not a finite number")
        } else if value < 0.0 {
            Some("negative")
        } else if value.fract() != 0.0 {
            Some("not an integer")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(VibeError::InvalidFid {
                value: value.to_string(),
                reason,
            });
        }
        // MAX_FID is exactly representable, so the comparison is exact.
        #[allow(clippy::cast_precision_loss)]
        let max = MAX_FID as f64;
        if value > max {
            return Err(VibeError::InvalidFid {
                value: value.to_string(),
                reason: "exceeds 2^53 - 1",
            });
        }
        Ok(Self(value as u64))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The FID as a float. Exact for every valid FID.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<u64> for Fid {
    type Error = VibeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Fid> for u64 {
    fn from(fid: Fid) -> Self {
        fid.0
    }
}

impl fmt::Display for Fid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fid {
    type Err = VibeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<u64>().map_err(|_| VibeError::InvalidFid {
            value: s.to_string(),
            reason: "not a non-negative integer",
        })?;
        Self::new(value)
    }
}

/// Caller-supplied entropy for non-deterministic previews ("reroll").
///
/// Always finite; omitting it keeps trait generation deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtraSeed(f64);

impl ExtraSeed {
    /// # Errors
    ///
    /// Returns [`VibeError::NonFiniteSeed`] for NaN or infinite input.
    pub fn new(value: f64) -> Result<Self, VibeError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(VibeError::NonFiniteSeed(value))
        }
    }

    /// Extra seed from a millisecond timestamp, as the reroll preview uses.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis as f64)
    }

    /// Extra seed from the current wall clock.
    #[must_use]
    pub fn now() -> Self {
        Self::from_millis(chrono::Utc::now().timestamp_millis())
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for ExtraSeed {
    type Err = VibeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| VibeError::UnparseableSeed(s.to_string()))?;
        Self::new(value)
    }
}
