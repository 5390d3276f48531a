pub mod card;
pub mod fid;

pub use card::{FidTraits, Foil, ParseEnumError, Rarity, Wear};
pub use fid::{ExtraSeed, Fid, MAX_FID};
