use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::VibeError;
use crate::limit::RateLimitPolicy;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "vibefid.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VibeConfig {
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl VibeConfig {
    /// Reject values that would silently disable rate limiting or sessions.
    ///
    /// # Errors
    ///
    /// Returns [`VibeError::Config`] for a zero rate-limit window or session TTL.
    pub fn validate(&self) -> Result<(), VibeError> {
        if self.rate_limit.window_secs == 0 {
            return Err(VibeError::Config(
                "rate_limit.window_secs must be at least 1".to_string(),
            ));
        }
        if self.session.ttl_secs == 0 {
            return Err(VibeError::Config(
                "session.ttl_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_collection_name")]
    pub collection_name: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_external_base_url")]
    pub external_base_url: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            collection_name: default_collection_name(),
            image_base_url: default_image_base_url(),
            external_base_url: default_external_base_url(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_max_requests")]
    pub max_requests: u64,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

impl RateLimitConfig {
    #[must_use]
    pub fn policy(&self) -> RateLimitPolicy {
        RateLimitPolicy::new(self.max_requests, secs_to_millis(self.window_secs))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn ttl_millis(&self) -> i64 {
        secs_to_millis(self.ttl_secs)
    }
}

fn secs_to_millis(secs: u64) -> i64 {
    i64::try_from(secs.saturating_mul(1000)).unwrap_or(i64::MAX)
}

/// Parse a config file.
///
/// # Errors
///
/// Fails when the file cannot be read, is not valid TOML for [`VibeConfig`],
/// or fails [`VibeConfig::validate`].
pub fn load_config_file(path: &Path) -> Result<VibeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<VibeConfig>(&content)
        .map_err(|e| VibeError::Config(format!("{}: {e}", path.display())))?;
    config.validate().map_err(|e| match e {
        VibeError::Config(msg) => VibeError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    Ok(config)
}

/// Candidate config locations, most specific first.
#[must_use]
pub fn config_search_paths(working_dir: &Path) -> Vec<PathBuf> {
    let mut paths = vec![working_dir.join(PROJECT_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("vibefid/config.toml"));
    }
    paths
}

/// Resolve the effective config.
///
/// An explicit path must exist. Otherwise the first existing file from
/// [`config_search_paths`] is used, falling back to defaults.
///
/// # Errors
///
/// Fails when the chosen file cannot be read or parsed.
pub fn resolve_config(explicit: Option<&Path>, working_dir: &Path) -> Result<VibeConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    for path in config_search_paths(working_dir) {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            return load_config_file(&path);
        }
    }

    Ok(VibeConfig::default())
}

fn default_collection_name() -> String {
    "VibeFID".to_string()
}

fn default_image_base_url() -> String {
    "https://vibefid.xyz/api/card-image".to_string()
}

fn default_external_base_url() -> String {
    "https://vibefid.xyz/fid".to_string()
}

const fn default_max_requests() -> u64 {
    10
}

const fn default_window_secs() -> u64 {
    60
}

const fn default_session_ttl_secs() -> u64 {
    90
}
