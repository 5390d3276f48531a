use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::VibeError;
use crate::model::{Fid, FidTraits, Foil, Wear};

/// Upper bound on FIDs tallied in one call.
pub const MAX_RANGE_LEN: u64 = 5_000_000;

/// Observed deterministic trait counts over an inclusive FID range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitDistribution {
    pub from: u64,
    pub to: u64,
    pub total: u64,
    pub foil: BTreeMap<Foil, u64>,
    pub wear: BTreeMap<Wear, u64>,
}

impl TraitDistribution {
    /// Roll every FID in `from..=to` and tally the results.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::InvalidRange`] when `from > to` or the range is
    /// longer than [`MAX_RANGE_LEN`], and [`VibeError::InvalidFid`] when
    /// `to` is not a valid FID.
    pub fn over_range(from: u64, to: u64) -> Result<Self, VibeError> {
        if from > to || to - from >= MAX_RANGE_LEN {
            return Err(VibeError::InvalidRange { from, to });
        }
        Fid::new(to)?;

        let mut foil: BTreeMap<Foil, u64> = Foil::ALL.iter().map(|f| (*f, 0)).collect();
        let mut wear: BTreeMap<Wear, u64> = Wear::ALL.iter().map(|w| (*w, 0)).collect();

        for raw in from..=to {
            let traits = FidTraits::roll(Fid::new(raw)?);
            *foil.entry(traits.foil).or_default() += 1;
            *wear.entry(traits.wear).or_default() += 1;
        }

        tracing::debug!(from, to, "tallied trait distribution");

        Ok(Self {
            from,
            to,
            total: to - from + 1,
            foil,
            wear,
        })
    }

    /// Share of `foil` in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn foil_percent(&self, foil: Foil) -> f64 {
        let count = self.foil.get(&foil).copied().unwrap_or(0);
        count as f64 * 100.0 / self.total as f64
    }

    /// Share of `wear` in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn wear_percent(&self, wear: Wear) -> f64 {
        let count = self.wear.get(&wear).copied().unwrap_or(0);
        count as f64 * 100.0 / self.total as f64
    }
}
