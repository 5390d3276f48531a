//! FID-banded probability tables for the foil and wear rolls.
//!
//! Bands ascend by FID, are inclusive on their upper bound, and the last
//! band is open-ended. Lower FIDs are weighted toward Prize/Pristine.
//! Thresholds and weights are shared with every minting and metadata
//! consumer and must not change for already-minted ranges.

use serde::Serialize;

use crate::model::{Fid, Foil, Wear};
use crate::roll::Weighted;

/// One FID band: every FID `<= max_fid` not claimed by an earlier band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band<T: 'static> {
    /// Inclusive upper bound, `None` for the final open-ended band.
    pub max_fid: Option<u64>,
    pub choices: &'static [Weighted<T>],
}

impl<T: 'static> Band<T> {
    #[must_use]
    pub const fn contains_upper(&self, fid: u64) -> bool {
        match self.max_fid {
            Some(max) => fid <= max,
            None => true,
        }
    }
}

/// Upper bounds shared by the foil and wear bands.
pub const BAND_THRESHOLDS: [u64; 6] = [5_000, 20_000, 100_000, 250_000, 500_000, 1_200_000];

const fn w<T>(value: T, weight: u32) -> Weighted<T> {
    Weighted::new(value, weight)
}

pub static FOIL_BANDS: [Band<Foil>; 7] = [
    Band {
        max_fid: Some(5_000),
        choices: &[w(Foil::Prize, 100)],
    },
    Band {
        max_fid: Some(20_000),
        choices: &[w(Foil::Prize, 80), w(Foil::Standard, 20)],
    },
    Band {
        max_fid: Some(100_000),
        choices: &[w(Foil::Prize, 30), w(Foil::Standard, 60), w(Foil::None, 10)],
    },
    Band {
        max_fid: Some(250_000),
        choices: &[w(Foil::Prize, 5), w(Foil::Standard, 35), w(Foil::None, 60)],
    },
    Band {
        max_fid: Some(500_000),
        choices: &[w(Foil::Prize, 3), w(Foil::Standard, 25), w(Foil::None, 72)],
    },
    Band {
        max_fid: Some(1_200_000),
        choices: &[w(Foil::Prize, 1), w(Foil::Standard, 10), w(Foil::None, 89)],
    },
    Band {
        max_fid: None,
        choices: &[w(Foil::Standard, 5), w(Foil::None, 95)],
    },
];

pub static WEAR_BANDS: [Band<Wear>; 7] = [
    Band {
        max_fid: Some(5_000),
        choices: &[w(Wear::Pristine, 100)],
    },
    Band {
        max_fid: Some(20_000),
        choices: &[w(Wear::Pristine, 90), w(Wear::Mint, 10)],
    },
    Band {
        max_fid: Some(100_000),
        choices: &[
            w(Wear::Pristine, 50),
            w(Wear::Mint, 40),
            w(Wear::LightlyPlayed, 10),
        ],
    },
    Band {
        max_fid: Some(250_000),
        choices: &[
            w(Wear::Pristine, 2),
            w(Wear::Mint, 18),
            w(Wear::LightlyPlayed, 45),
            w(Wear::ModeratelyPlayed, 30),
            w(Wear::HeavilyPlayed, 5),
        ],
    },
    Band {
        max_fid: Some(500_000),
        choices: &[
            w(Wear::Mint, 5),
            w(Wear::LightlyPlayed, 35),
            w(Wear::ModeratelyPlayed, 45),
            w(Wear::HeavilyPlayed, 15),
        ],
    },
    Band {
        max_fid: Some(1_200_000),
        choices: &[
            w(Wear::LightlyPlayed, 5),
            w(Wear::ModeratelyPlayed, 45),
            w(Wear::HeavilyPlayed, 50),
        ],
    },
    Band {
        max_fid: None,
        choices: &[w(Wear::ModeratelyPlayed, 10), w(Wear::HeavilyPlayed, 90)],
    },
];

/// Find the band covering `fid`. The final band is open-ended, so this
/// always matches when `bands` ends with one.
fn band_for<T: 'static>(bands: &'static [Band<T>], fid: u64) -> &'static Band<T> {
    let last = bands.len() - 1;
    bands
        .iter()
        .find(|band| band.contains_upper(fid))
        .unwrap_or(&bands[last])
}

/// Index of the band covering `fid` (0 = lowest FIDs).
#[must_use]
pub fn band_index(fid: Fid) -> usize {
    let raw = fid.get();
    BAND_THRESHOLDS
        .iter()
        .position(|&max| raw <= max)
        .unwrap_or(BAND_THRESHOLDS.len())
}

/// Ordered foil weights for the band containing `fid`.
#[must_use]
pub fn foil_table_for_fid(fid: Fid) -> &'static [Weighted<Foil>] {
    band_for(&FOIL_BANDS, fid.get()).choices
}

/// Ordered wear weights for the band containing `fid`.
#[must_use]
pub fn wear_table_for_fid(fid: Fid) -> &'static [Weighted<Wear>] {
    band_for(&WEAR_BANDS, fid.get()).choices
}

/// Weight of `value` in `choices`, 0 when absent.
#[must_use]
pub fn weight_of<T: PartialEq>(choices: &[Weighted<T>], value: &T) -> u32 {
    choices
        .iter()
        .filter(|choice| &choice.value == value)
        .map(|choice| choice.weight)
        .sum()
}
