use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;
use vibefid_core::tables::band_index;
use vibefid_core::{ExtraSeed, Fid, FidTraits, Foil, TraitSeeds, Wear, get_fid_traits};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `vibefid traits`.
#[derive(Args, Debug)]
pub struct TraitsArgs {
    /// Farcaster ID to roll traits for.
    pub fid: Fid,

    /// Extra entropy for a preview roll. Omit for the mint-time result.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "reroll")]
    pub extra_seed: Option<ExtraSeed>,

    /// Preview a reroll seeded from the current time in milliseconds.
    #[arg(long)]
    pub reroll: bool,
}

impl TraitsArgs {
    /// The extra seed to use, if any.
    pub fn resolve_extra_seed(&self) -> Option<ExtraSeed> {
        if self.reroll {
            Some(ExtraSeed::now())
        } else {
            self.extra_seed
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TraitsReport {
    pub fid: Fid,
    pub foil: Foil,
    pub wear: Wear,
    pub band: usize,
    pub deterministic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_seed: Option<f64>,
    pub seeds: TraitSeeds,
}

impl TraitsReport {
    pub fn build(fid: Fid, extra_seed: Option<ExtraSeed>) -> Self {
        let FidTraits { foil, wear } = get_fid_traits(fid, extra_seed);
        Self {
            fid,
            foil,
            wear,
            band: band_index(fid),
            deterministic: extra_seed.is_none(),
            extra_seed: extra_seed.map(ExtraSeed::get),
            seeds: TraitSeeds::derive(fid, extra_seed),
        }
    }
}

fn render_text(report: &TraitsReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}\t{}\t{}", report.fid, report.foil, report.wear)
}

fn render_pretty(report: &TraitsReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("FID {}", report.fid))?;
    pretty_kv(w, "Foil", report.foil.as_str())?;
    pretty_kv(w, "Wear", report.wear.as_str())?;
    pretty_kv(w, "Band", report.band.to_string())?;
    let mode = match report.extra_seed {
        Some(extra) => format!("preview (extra seed {extra})"),
        None => "deterministic".to_string(),
    };
    pretty_kv(w, "Mode", mode)
}

/// Roll and print traits for one FID.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_traits(args: &TraitsArgs, output: OutputMode) -> Result<()> {
    let extra_seed = args.resolve_extra_seed();
    let report = TraitsReport::build(args.fid, extra_seed);
    info!(fid = report.fid.get(), deterministic = report.deterministic, "rolled traits");
    render_mode(output, &report, render_text, render_pretty)
}
