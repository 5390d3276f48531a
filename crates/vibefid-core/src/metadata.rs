//! OpenSea-style token metadata for a VibeFID card.

use serde::{Deserialize, Serialize};

use crate::config::MetadataConfig;
use crate::error::VibeError;
use crate::model::{Fid, FidTraits, Rarity};
use crate::power::CardPower;

/// Everything needed to describe one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardInput {
    pub fid: Fid,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Traits recorded at mint time. When absent they are recomputed from `fid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<FidTraits>,
}

/// Attribute value: OpenSea renders numbers and strings differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

impl Attribute {
    fn text(trait_type: &str, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Text(value.into()),
            display_type: None,
        }
    }

    fn number(trait_type: &str, value: f64) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Number(value),
            display_type: Some("number".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub external_url: String,
    pub attributes: Vec<Attribute>,
}

fn join_url(base: &str, fid: Fid) -> String {
    format!("{}/{fid}", base.trim_end_matches('/'))
}

impl CardMetadata {
    /// Build metadata for `card`.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::InvalidScore`] when the score is outside `[0, 1]`.
    pub fn build(config: &MetadataConfig, card: &CardInput) -> Result<Self, VibeError> {
        let rarity = Rarity::from_score(card.score)?;
        let traits = card.traits.unwrap_or_else(|| FidTraits::roll(card.fid));
        let power = CardPower::compute(rarity, traits);

        let subject = card
            .username
            .as_deref()
            .map_or_else(|| format!("FID {}", card.fid), |name| format!("@{name}"));

        let mut attributes = vec![
            Attribute::number("FID", card.fid.as_f64()),
            Attribute::text("Rarity", rarity.as_str()),
            Attribute::text("Foil", traits.foil.as_str()),
            Attribute::text("Wear", traits.wear.as_str()),
            Attribute::number("Power", f64::from(power.power)),
            Attribute::number("Neynar Score", card.score),
        ];
        if let Some(username) = &card.username {
            attributes.push(Attribute::text("Username", username.clone()));
        }

        Ok(Self {
            name: format!("{} #{}", config.collection_name, card.fid),
            description: format!(
                "{} card for {subject}: {rarity} with {traits}.",
                config.collection_name
            ),
            image: join_url(&config.image_base_url, card.fid),
            external_url: join_url(&config.external_base_url, card.fid),
            attributes,
        })
    }

    /// Look up an attribute by trait type.
    #[must_use]
    pub fn attribute(&self, trait_type: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attr| attr.trait_type == trait_type)
            .map(|attr| &attr.value)
    }
}
