use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use vibefid_core::Fid;
use vibefid_core::roll::Weighted;
use vibefid_core::tables::{FOIL_BANDS, WEAR_BANDS, band_index};

use crate::output::{OutputMode, Renderable, pretty_kv, pretty_rule, render_list};

/// Arguments for `vibefid tables`.
#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Only show the band containing this FID.
    #[arg(long)]
    pub fid: Option<Fid>,
}

/// One band of the foil and wear tables.
#[derive(Debug, Serialize)]
pub struct BandRow {
    pub band: usize,
    pub min_fid: u64,
    pub max_fid: Option<u64>,
    pub foil: Vec<(String, u32)>,
    pub wear: Vec<(String, u32)>,
}

fn weights<T: std::fmt::Display>(choices: &[Weighted<T>]) -> Vec<(String, u32)> {
    choices
        .iter()
        .map(|choice| (choice.value.to_string(), choice.weight))
        .collect()
}

fn format_weights(weights: &[(String, u32)]) -> String {
    weights
        .iter()
        .map(|(name, weight)| format!("{name} {weight}%"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// All bands in ascending FID order.
pub fn band_rows() -> Vec<BandRow> {
    let mut min_fid = 0;
    FOIL_BANDS
        .iter()
        .zip(WEAR_BANDS.iter())
        .enumerate()
        .map(|(band, (foil, wear))| {
            let row = BandRow {
                band,
                min_fid,
                max_fid: foil.max_fid,
                foil: weights(foil.choices),
                wear: weights(wear.choices),
            };
            min_fid = foil.max_fid.map_or(u64::MAX, |max| max + 1);
            row
        })
        .collect()
}

impl Renderable for BandRow {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        let range = match self.max_fid {
            Some(max) => format!("{} - {max}", self.min_fid),
            None => format!("{}+", self.min_fid),
        };
        writeln!(w, "Band {} (FID {range})", self.band)?;
        pretty_rule(w)?;
        pretty_kv(w, "Foil", format_weights(&self.foil))?;
        pretty_kv(w, "Wear", format_weights(&self.wear))?;
        writeln!(w)
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        let val = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        write!(w, "{val}")
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        let max = self
            .max_fid
            .map_or_else(|| "-".to_string(), |max| max.to_string());
        writeln!(
            w,
            "{}\t{}\t{max}\t{}\t{}",
            self.band,
            self.min_fid,
            format_weights(&self.foil),
            format_weights(&self.wear)
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["BAND", "MIN_FID", "MAX_FID", "FOIL", "WEAR"]
    }
}

/// Print the probability tables.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_tables(args: &TablesArgs, output: OutputMode) -> Result<()> {
    let mut rows = band_rows();
    if let Some(fid) = args.fid {
        let wanted = band_index(fid);
        rows.retain(|row| row.band == wanted);
    }
    render_list(&rows, output)?;
    Ok(())
}
