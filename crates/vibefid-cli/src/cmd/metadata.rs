use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use vibefid_core::Fid;
use vibefid_core::config::VibeConfig;
use vibefid_core::metadata::{AttributeValue, CardInput, CardMetadata};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `vibefid metadata`.
#[derive(Args, Debug)]
pub struct MetadataArgs {
    /// Farcaster ID of the card.
    pub fid: Fid,

    /// Neynar user score in [0, 1].
    #[arg(long)]
    pub score: f64,

    /// Farcaster username shown on the card.
    #[arg(long)]
    pub username: Option<String>,
}

fn value_text(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Number(n) => n.to_string(),
        AttributeValue::Text(s) => s.clone(),
    }
}

fn render_text(meta: &CardMetadata, w: &mut dyn Write) -> io::Result<()> {
    for attr in &meta.attributes {
        writeln!(w, "{}\t{}", attr.trait_type, value_text(&attr.value))?;
    }
    Ok(())
}

fn render_pretty(meta: &CardMetadata, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &meta.name)?;
    writeln!(w, "{}", meta.description)?;
    pretty_kv(w, "Image", &meta.image)?;
    pretty_kv(w, "URL", &meta.external_url)?;
    for attr in &meta.attributes {
        pretty_kv(w, &attr.trait_type, value_text(&attr.value))?;
    }
    Ok(())
}

/// Build and print token metadata for one card.
///
/// # Errors
///
/// Fails on an invalid score or when writing output fails.
pub fn run_metadata(args: &MetadataArgs, config: &VibeConfig, output: OutputMode) -> Result<()> {
    let card = CardInput {
        fid: args.fid,
        score: args.score,
        username: args.username.clone(),
        traits: None,
    };
    let meta = CardMetadata::build(&config.metadata, &card)?;
    render_mode(output, &meta, render_text, render_pretty)
}
