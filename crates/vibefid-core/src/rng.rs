//! Single-sample seeded generator shared by every trait roll.
//!
//! The formula is part of the card wire contract: the mint signer, the
//! metadata server and preview clients must all produce the same float for
//! the same seed, so it must not be swapped for a "better" generator.

/// Scale applied to `sin(seed)` before taking the fractional part.
const SINE_SCALE: f64 = 10_000.0;

/// Map a numeric seed to a float in `[0, 1)`.
///
/// Pure function of `seed`: `x = sin(seed) * 10000; x - floor(x)`.
/// A non-finite seed yields `NaN`; callers build seeds from validated
/// [`Fid`](crate::model::Fid) and [`ExtraSeed`](crate::model::ExtraSeed) values.
#[must_use]
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * SINE_SCALE;
    x - x.floor()
}
