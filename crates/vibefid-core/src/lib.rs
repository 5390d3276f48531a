//! vibefid-core library.
//!
//! Deterministic trait generation for VibeFID cards plus the pieces every
//! minting and metadata consumer shares: rarity, power, metadata rendering,
//! and TTL-backed rate limiting.
//!
//! # Conventions
//!
//! - **Errors**: Use [`error::VibeError`] for library results; config loading
//!   returns `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

#![forbid(unsafe_code)]

pub mod assemble;
pub mod config;
pub mod distribution;
pub mod error;
pub mod limit;
pub mod metadata;
pub mod model;
pub mod power;
pub mod rng;
pub mod roll;
pub mod tables;

pub use assemble::{TraitSeeds, get_fid_traits};
pub use error::{ErrorCode, VibeError};
pub use model::{ExtraSeed, Fid, FidTraits, Foil, Rarity, Wear};
pub use power::{CardPower, card_power};
