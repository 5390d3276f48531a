use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use vibefid_core::{CardPower, ExtraSeed, Fid, FidTraits, Rarity, get_fid_traits};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `vibefid power`.
#[derive(Args, Debug)]
pub struct PowerArgs {
    /// Farcaster ID of the card.
    pub fid: Fid,

    /// Neynar user score in [0, 1].
    #[arg(long)]
    pub score: f64,

    /// Extra entropy for a preview roll.
    #[arg(long, allow_hyphen_values = true)]
    pub extra_seed: Option<ExtraSeed>,
}

#[derive(Debug, Serialize)]
pub struct PowerReport {
    pub fid: Fid,
    pub score: f64,
    pub traits: FidTraits,
    #[serde(flatten)]
    pub breakdown: CardPower,
}

impl PowerReport {
    /// # Errors
    ///
    /// Fails when `score` is not a valid Neynar score.
    pub fn build(fid: Fid, score: f64, extra_seed: Option<ExtraSeed>) -> Result<Self> {
        let rarity = Rarity::from_score(score)?;
        let traits = get_fid_traits(fid, extra_seed);
        Ok(Self {
            fid,
            score,
            traits,
            breakdown: CardPower::compute(rarity, traits),
        })
    }
}

fn render_text(report: &PowerReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "{}\t{}\t{}\t{}\t{}",
        report.fid,
        report.breakdown.rarity,
        report.traits.foil,
        report.traits.wear,
        report.breakdown.power
    )
}

fn render_pretty(report: &PowerReport, w: &mut dyn Write) -> io::Result<()> {
    let b = &report.breakdown;
    pretty_section(w, &format!("FID {} power", report.fid))?;
    pretty_kv(w, "Score", format!("{:.3}", report.score))?;
    pretty_kv(w, "Rarity", format!("{} (base {})", b.rarity, b.base))?;
    pretty_kv(
        w,
        "Foil",
        format!("{} (x{})", report.traits.foil, b.foil_multiplier),
    )?;
    pretty_kv(
        w,
        "Wear",
        format!("{} (x{})", report.traits.wear, b.wear_multiplier),
    )?;
    pretty_kv(w, "Power", b.power.to_string())
}

/// Compute and print card power.
///
/// # Errors
///
/// Fails on an invalid score or when writing output fails.
pub fn run_power(args: &PowerArgs, output: OutputMode) -> Result<()> {
    let report = PowerReport::build(args.fid, args.score, args.extra_seed)?;
    render_mode(output, &report, render_text, render_pretty)
}
