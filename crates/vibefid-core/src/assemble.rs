use serde::Serialize;
use tracing::debug;

use crate::model::{ExtraSeed, Fid, FidTraits, Foil, Wear};
use crate::roll::weighted_roll;
use crate::tables::{foil_table_for_fid, wear_table_for_fid};

/// The two seeds fed to the foil and wear rolls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraitSeeds {
    pub foil: f64,
    pub wear: f64,
}

impl TraitSeeds {
    /// Foil uses `fid + extra`, wear uses `fid * 2 + extra`.
    ///
    /// The doubled wear seed keeps the two rolls from tracking each other.
    /// Arithmetic is done in `f64` so every consumer rounds identically.
    #[must_use]
    pub fn derive(fid: Fid, extra: Option<ExtraSeed>) -> Self {
        let base = fid.as_f64();
        match extra {
            Some(extra) => Self {
                foil: base + extra.get(),
                wear: base * 2.0 + extra.get(),
            },
            None => Self {
                foil: base,
                wear: base * 2.0,
            },
        }
    }
}

impl FidTraits {
    /// Deterministic traits for `fid`; identical on every call.
    #[must_use]
    pub fn roll(fid: Fid) -> Self {
        get_fid_traits(fid, None)
    }

    /// Preview traits perturbed by caller entropy (e.g. a timestamp).
    #[must_use]
    pub fn reroll(fid: Fid, extra: ExtraSeed) -> Self {
        get_fid_traits(fid, Some(extra))
    }
}

/// Roll foil and wear for `fid`.
///
/// Without `extra_seed` the result is a pure function of `fid`, which is what
/// lets the mint signer and metadata server agree with client previews.
#[must_use]
pub fn get_fid_traits(fid: Fid, extra_seed: Option<ExtraSeed>) -> FidTraits {
    let seeds = TraitSeeds::derive(fid, extra_seed);

    // Built-in tables are never empty; the fallbacks are the tables' own
    // least desirable entries.
    let foil = weighted_roll(seeds.foil, foil_table_for_fid(fid)).unwrap_or(Foil::None);
    let wear = weighted_roll(seeds.wear, wear_table_for_fid(fid)).unwrap_or(Wear::HeavilyPlayed);

    debug!(
        fid = fid.get(),
        foil_seed = seeds.foil,
        wear_seed = seeds.wear,
        %foil,
        %wear,
        "rolled fid traits"
    );

    FidTraits { foil, wear }
}
