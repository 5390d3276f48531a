//! Rarity classification and the card power formula.
//!
//! Power is `round(base(rarity) * foil multiplier * wear multiplier)`.

use serde::Serialize;

use crate::error::VibeError;
use crate::model::{FidTraits, Foil, Rarity, Wear};

impl Rarity {
    /// Classify a Neynar score in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::InvalidScore`] for non-finite or out-of-range scores.
    pub fn from_score(score: f64) -> Result<Self, VibeError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(VibeError::InvalidScore(score));
        }
        let rarity = if score >= 0.99 {
            Self::Mythic
        } else if score >= 0.90 {
            Self::Legendary
        } else if score >= 0.79 {
            Self::Epic
        } else if score >= 0.70 {
            Self::Rare
        } else {
            Self::Common
        };
        Ok(rarity)
    }

    #[must_use]
    pub const fn base_power(self) -> u32 {
        match self {
            Self::Common => 10,
            Self::Rare => 20,
            Self::Epic => 80,
            Self::Legendary => 240,
            Self::Mythic => 800,
        }
    }
}

impl Foil {
    #[must_use]
    pub const fn power_multiplier(self) -> f64 {
        match self {
            Self::Prize => 15.0,
            Self::Standard => 2.5,
            Self::None => 1.0,
        }
    }
}

impl Wear {
    #[must_use]
    pub const fn power_multiplier(self) -> f64 {
        match self {
            Self::Pristine => 1.8,
            Self::Mint => 1.4,
            Self::LightlyPlayed | Self::ModeratelyPlayed | Self::HeavilyPlayed => 1.0,
        }
    }
}

/// Power breakdown for one card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPower {
    pub rarity: Rarity,
    pub base: u32,
    pub foil_multiplier: f64,
    pub wear_multiplier: f64,
    pub power: u32,
}

impl CardPower {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compute(rarity: Rarity, traits: FidTraits) -> Self {
        let base = rarity.base_power();
        let foil_multiplier = traits.foil.power_multiplier();
        let wear_multiplier = traits.wear.power_multiplier();
        // Largest product is 800 * 15 * 1.8, well inside u32.
        let power = (f64::from(base) * foil_multiplier * wear_multiplier).round() as u32;
        Self {
            rarity,
            base,
            foil_multiplier,
            wear_multiplier,
            power,
        }
    }
}

/// Power for a card of `rarity` carrying `traits`.
#[must_use]
pub fn card_power(rarity: Rarity, traits: FidTraits) -> u32 {
    CardPower::compute(rarity, traits).power
}
