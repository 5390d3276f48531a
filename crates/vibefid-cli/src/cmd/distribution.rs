use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use vibefid_core::distribution::TraitDistribution;
use vibefid_core::{Foil, Wear};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `vibefid distribution`.
#[derive(Args, Debug)]
pub struct DistributionArgs {
    /// First FID in the range (inclusive).
    #[arg(long)]
    pub from: u64,

    /// Last FID in the range (inclusive).
    #[arg(long)]
    pub to: u64,
}

fn render_text(dist: &TraitDistribution, w: &mut dyn Write) -> io::Result<()> {
    for foil in Foil::ALL {
        writeln!(w, "foil\t{foil}\t{}", dist.foil.get(&foil).copied().unwrap_or(0))?;
    }
    for wear in Wear::ALL {
        writeln!(w, "wear\t{wear}\t{}", dist.wear.get(&wear).copied().unwrap_or(0))?;
    }
    Ok(())
}

fn render_pretty(dist: &TraitDistribution, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(
        w,
        &format!("FIDs {}..={} ({} cards)", dist.from, dist.to, dist.total),
    )?;
    for foil in Foil::ALL {
        pretty_kv(w, foil.as_str(), format!("{:6.2}%", dist.foil_percent(foil)))?;
    }
    writeln!(w)?;
    for wear in Wear::ALL {
        pretty_kv(w, wear.as_str(), format!("{:6.2}%", dist.wear_percent(wear)))?;
    }
    Ok(())
}

/// Tally deterministic traits over a FID range.
///
/// # Errors
///
/// Fails on an invalid range or when writing output fails.
pub fn run_distribution(args: &DistributionArgs, output: OutputMode) -> Result<()> {
    let dist = TraitDistribution::over_range(args.from, args.to)?;
    render_mode(output, &dist, render_text, render_pretty)
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use vibefid_core::distribution::TraitDistribution;

    #[test]
    fn text_lists_every_value() {
        let dist = TraitDistribution::over_range(1, 100).expect("valid");
        let mut buf = Vec::new();
        render_text(&dist, &mut buf).expect("render");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text.lines().count(), 8);
        assert!(text.contains("foil\tPrize\t100\n"));
        assert!(text.contains("wear\tHeavily Played\t0\n"));
    }
}
