use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Cosmetic foil finish. Declared from most to least desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Foil {
    Prize,
    Standard,
    None,
}

impl Foil {
    pub const ALL: [Self; 3] = [Self::Prize, Self::Standard, Self::None];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prize => "Prize",
            Self::Standard => "Standard",
            Self::None => "None",
        }
    }

    /// Desirability rank, 0 = best.
    #[must_use]
    pub const fn rank(self) -> u32 {
        self as u32
    }
}

/// Cosmetic card condition. Declared from most to least desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Wear {
    Pristine,
    Mint,
    #[serde(rename = "Lightly Played")]
    LightlyPlayed,
    #[serde(rename = "Moderately Played")]
    ModeratelyPlayed,
    #[serde(rename = "Heavily Played")]
    HeavilyPlayed,
}

impl Wear {
    pub const ALL: [Self; 5] = [
        Self::Pristine,
        Self::Mint,
        Self::LightlyPlayed,
        Self::ModeratelyPlayed,
        Self::HeavilyPlayed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pristine => "Pristine",
            Self::Mint => "Mint",
            Self::LightlyPlayed => "Lightly Played",
            Self::ModeratelyPlayed => "Moderately Played",
            Self::HeavilyPlayed => "Heavily Played",
        }
    }

    /// Desirability rank, 0 = best.
    #[must_use]
    pub const fn rank(self) -> u32 {
        self as u32
    }
}

/// Card rarity derived from the holder's social score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Mythic,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Mythic => "Mythic",
        }
    }
}

/// The two cosmetic traits rolled for a FID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FidTraits {
    pub foil: Foil,
    pub wear: Wear,
}

impl fmt::Display for Foil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Wear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FidTraits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} foil, {}", self.foil, self.wear)
    }
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

/// Lowercase and drop separators so "lightly-played" matches "Lightly Played".
fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .to_ascii_lowercase()
}

impl FromStr for Foil {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "prize" => Ok(Self::Prize),
            "standard" => Ok(Self::Standard),
            "none" => Ok(Self::None),
            _ => Err(ParseEnumError {
                expected: "foil",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Wear {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pristine" => Ok(Self::Pristine),
            "mint" => Ok(Self::Mint),
            "lightlyplayed" => Ok(Self::LightlyPlayed),
            "moderatelyplayed" => Ok(Self::ModeratelyPlayed),
            "heavilyplayed" => Ok(Self::HeavilyPlayed),
            _ => Err(ParseEnumError {
                expected: "wear",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Rarity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "common" => Ok(Self::Common),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            "mythic" => Ok(Self::Mythic),
            _ => Err(ParseEnumError {
                expected: "rarity",
                got: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FidTraits, Foil, Rarity, Wear};
    use std::str::FromStr;

    #[test]
    fn wire_names_match_display_names() {
        assert_eq!(serde_json::to_string(&Foil::None).unwrap(), "\"None\"");
        assert_eq!(
            serde_json::to_string(&Wear::LightlyPlayed).unwrap(),
            "\"Lightly Played\""
        );
        assert_eq!(
            serde_json::from_str::<Wear>("\"Heavily Played\"").unwrap(),
            Wear::HeavilyPlayed
        );
        assert_eq!(serde_json::to_string(&Rarity::Mythic).unwrap(), "\"Mythic\"");

        let traits = FidTraits {
            foil: Foil::Prize,
            wear: Wear::Pristine,
        };
        assert_eq!(
            serde_json::to_string(&traits).unwrap(),
            r#"{"foil":"Prize","wear":"Pristine"}"#
        );
    }

    #[test]
    fn display_parse_roundtrips() {
        for value in Foil::ALL {
            assert_eq!(Foil::from_str(&value.to_string()).unwrap(), value);
        }
        for value in Wear::ALL {
            assert_eq!(Wear::from_str(&value.to_string()).unwrap(), value);
        }
        for value in Rarity::ALL {
            assert_eq!(Rarity::from_str(&value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn parse_accepts_cli_spellings() {
        assert_eq!(Wear::from_str("moderately-played").unwrap(), Wear::ModeratelyPlayed);
        assert_eq!(Wear::from_str("heavily_played").unwrap(), Wear::HeavilyPlayed);
        assert_eq!(Foil::from_str("PRIZE").unwrap(), Foil::Prize);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert!(Foil::from_str("holo").is_err());
        assert!(Wear::from_str("damaged").is_err());
        assert!(Rarity::from_str("ultra").is_err());
    }

    #[test]
    fn ranks_follow_declaration_order() {
        assert_eq!(Foil::Prize.rank(), 0);
        assert_eq!(Foil::None.rank(), 2);
        assert_eq!(Wear::Pristine.rank(), 0);
        assert_eq!(Wear::HeavilyPlayed.rank(), 4);
    }

    #[test]
    fn traits_display() {
        let traits = FidTraits {
            foil: Foil::Standard,
            wear: Wear::Mint,
        };
        assert_eq!(traits.to_string(), "Standard foil, Mint");
    }
}
