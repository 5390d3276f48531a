#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::{OutputMode, cli_error_from, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vibefid_core::config::resolve_config;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "vibefid: deterministic card traits for Farcaster IDs",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Output format (overrides --json and the FORMAT env var).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Read configuration from this file instead of the search path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Cards",
        about = "Roll foil and wear for a FID",
        long_about = "Roll foil and wear for a FID. Without an extra seed the result is the mint-time outcome.",
        after_help = "EXAMPLES:\n    # Mint-time traits\n    vibefid traits 1234\n\n    # Preview a reroll with explicit entropy\n    vibefid traits 1234 --extra-seed 1700000000000\n\n    # Preview a reroll seeded from the clock\n    vibefid traits 1234 --reroll --json"
    )]
    Traits(cmd::traits::TraitsArgs),

    #[command(
        next_help_heading = "Cards",
        about = "Compute card power",
        long_about = "Compute card power from the Neynar score and the FID's rolled traits.",
        after_help = "EXAMPLES:\n    # Power for a Mythic OG card\n    vibefid power 1 --score 0.995\n\n    # Emit machine-readable output\n    vibefid power 1234 --score 0.8 --json"
    )]
    Power(cmd::power::PowerArgs),

    #[command(
        next_help_heading = "Cards",
        about = "Build token metadata",
        long_about = "Build OpenSea-style token metadata for a card.",
        after_help = "EXAMPLES:\n    # Metadata with a username\n    vibefid metadata 1234 --score 0.91 --username alice\n\n    # Use a custom config file\n    vibefid --config ./vibefid.toml metadata 1234 --score 0.5 --json"
    )]
    Metadata(cmd::metadata::MetadataArgs),

    #[command(
        next_help_heading = "Tables",
        about = "Show probability tables",
        long_about = "Show foil and wear probability tables for every FID band.",
        after_help = "EXAMPLES:\n    # All bands\n    vibefid tables\n\n    # Only the band a FID falls in\n    vibefid tables --fid 300000 --json"
    )]
    Tables(cmd::tables::TablesArgs),

    #[command(
        next_help_heading = "Tables",
        about = "Tally traits over a FID range",
        long_about = "Roll deterministic traits for every FID in a range and report the counts.",
        after_help = "EXAMPLES:\n    # Distribution for the first ten thousand FIDs\n    vibefid distribution --from 1 --to 10000\n\n    # Emit machine-readable output\n    vibefid distribution --from 500000 --to 600000 --json"
    )]
    Distribution(cmd::distribution::DistributionArgs),

    #[command(
        next_help_heading = "Setup",
        about = "Show effective configuration",
        after_help = "EXAMPLES:\n    # Print merged configuration as TOML\n    vibefid config --format text"
    )]
    Config,

    #[command(
        next_help_heading = "Setup",
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n    # Bash completions\n    vibefid completions bash > ~/.local/share/bash-completion/completions/vibefid"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("VIBEFID_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "vibefid=debug,vibefid_core=debug,info"
        } else {
            "vibefid=info,vibefid_core=info,warn"
        })
    });

    let format = env::var("VIBEFID_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output; logs go to stderr.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli, output: OutputMode) -> anyhow::Result<()> {
    let working_dir = env::current_dir()?;
    let config = resolve_config(cli.config.as_deref(), &working_dir)?;
    debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Traits(ref args) => cmd::traits::run_traits(args, output),
        Commands::Power(ref args) => cmd::power::run_power(args, output),
        Commands::Metadata(ref args) => cmd::metadata::run_metadata(args, &config, output),
        Commands::Tables(ref args) => cmd::tables::run_tables(args, output),
        Commands::Distribution(ref args) => {
            cmd::distribution::run_distribution(args, output)
        }
        Commands::Config => cmd::config::run_config(&config, output),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli.output_mode();
    match run(cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_err = cli_error_from(&err);
            if render_error(output, &cli_err).is_err() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["vibefid", "traits", "42", "--json", "--verbose"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Traits(_)));
    }

    #[test]
    fn format_flag_wins_over_json() {
        let cli = Cli::parse_from(["vibefid", "--json", "--format", "text", "tables"]);
        assert_eq!(cli.output_mode(), OutputMode::Text);
    }

    #[test]
    fn completions_subcommand_parses() {
        let cli = Cli::parse_from(["vibefid", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Commands::Completions(cmd::completions::CompletionsArgs {
                shell: clap_complete::Shell::Bash,
            })
        ));
    }

    #[test]
    fn all_subcommands_listed() {
        let subcommands = [
            vec!["vibefid", "traits", "1"],
            vec!["vibefid", "traits", "1", "--extra-seed", "-3.5"],
            vec!["vibefid", "traits", "1", "--reroll"],
            vec!["vibefid", "power", "1", "--score", "0.5"],
            vec!["vibefid", "metadata", "1", "--score", "0.5", "--username", "a"],
            vec!["vibefid", "tables"],
            vec!["vibefid", "tables", "--fid", "7"],
            vec!["vibefid", "distribution", "--from", "1", "--to", "10"],
            vec!["vibefid", "config"],
            vec!["vibefid", "completions", "zsh"],
        ];
        for args in &subcommands {
            let result = Cli::try_parse_from(args.iter());
            assert!(result.is_ok(), "failed to parse {args:?}: {:?}", result.err());
        }
    }

    #[test]
    fn invalid_fid_is_rejected_at_parse() {
        assert!(Cli::try_parse_from(["vibefid", "traits", "-1"]).is_err());
        assert!(Cli::try_parse_from(["vibefid", "traits", "abc"]).is_err());
        assert!(Cli::try_parse_from(["vibefid", "traits", "9007199254740992"]).is_err());
    }

    #[test]
    fn extra_seed_conflicts_with_reroll() {
        let result = Cli::try_parse_from([
            "vibefid",
            "traits",
            "1",
            "--reroll",
            "--extra-seed",
            "5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_extra_seed_is_rejected() {
        assert!(Cli::try_parse_from(["vibefid", "traits", "1", "--extra-seed", "NaN"]).is_err());
        assert!(Cli::try_parse_from(["vibefid", "traits", "1", "--extra-seed", "inf"]).is_err());
    }
}
