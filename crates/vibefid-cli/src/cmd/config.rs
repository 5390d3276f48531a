use anyhow::Result;
use std::io::{self, Write};
use vibefid_core::config::VibeConfig;

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

fn render_text(config: &VibeConfig, w: &mut dyn Write) -> io::Result<()> {
    let rendered = toml::to_string(config).map_err(io::Error::other)?;
    write!(w, "{rendered}")
}

fn render_pretty(config: &VibeConfig, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Metadata")?;
    pretty_kv(w, "Collection", &config.metadata.collection_name)?;
    pretty_kv(w, "Image base", &config.metadata.image_base_url)?;
    pretty_kv(w, "External base", &config.metadata.external_base_url)?;
    writeln!(w)?;
    pretty_section(w, "Rate limit")?;
    pretty_kv(w, "Max requests", config.rate_limit.max_requests.to_string())?;
    pretty_kv(w, "Window", format!("{}s", config.rate_limit.window_secs))?;
    writeln!(w)?;
    pretty_section(w, "Session")?;
    pretty_kv(w, "TTL", format!("{}s", config.session.ttl_secs))
}

/// Print the effective configuration.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_config(config: &VibeConfig, output: OutputMode) -> Result<()> {
    render_mode(output, config, render_text, render_pretty)
}
