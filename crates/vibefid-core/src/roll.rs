use serde::Serialize;

use crate::rng::seeded_random;

/// One entry of a discrete distribution: a value and its relative weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weighted<T> {
    pub value: T,
    pub weight: u32,
}

impl<T> Weighted<T> {
    #[must_use]
    pub const fn new(value: T, weight: u32) -> Self {
        Self { value, weight }
    }
}

/// Sum of all weights in `choices`.
#[must_use]
pub fn total_weight<T>(choices: &[Weighted<T>]) -> u32 {
    choices.iter().map(|choice| choice.weight).sum()
}

/// Draw one value from `choices` using the seeded generator.
///
/// `r = seeded_random(seed) * total`; walk the choices in order, subtracting
/// each weight, and return the first positive-weight choice that drives `r`
/// to zero or below. When nothing triggers (all weights zero, or float drift)
/// the last choice is returned. Returns `None` only for an empty slice.
#[must_use]
pub fn weighted_roll<T: Copy>(seed: f64, choices: &[Weighted<T>]) -> Option<T> {
    let last = choices.last()?;
    let total = f64::from(total_weight(choices));
    let mut remaining = seeded_random(seed) * total;

    for choice in choices {
        if choice.weight == 0 {
            continue;
        }
        remaining -= f64::from(choice.weight);
        if remaining <= 0.0 {
            return Some(choice.value);
        }
    }

    tracing::trace!(seed, total, "weighted roll fell through to last choice");
    Some(last.value)
}
