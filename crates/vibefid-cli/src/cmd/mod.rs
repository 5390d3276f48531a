pub mod completions;
pub mod config;
pub mod distribution;
pub mod metadata;
pub mod power;
pub mod tables;
pub mod traits;
