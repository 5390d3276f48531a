//! E2E CLI tests covering:
//! - `vibefid traits` determinism and rerolls
//! - `vibefid power` and `vibefid metadata` JSON contracts
//! - `vibefid tables` and `vibefid distribution`
//! - structured errors for bad input and bad config
//!
//! Each test runs the `vibefid` binary as a subprocess in an isolated temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the vibefid binary, rooted in `dir`.
fn vibefid_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vibefid"));
    cmd.current_dir(dir);
    cmd.env("VIBEFID_LOG", "error");
    cmd.env("XDG_CONFIG_HOME", dir);
    cmd.env("HOME", dir);
    cmd.env_remove("FORMAT");
    cmd
}

/// Run a command with `--json` and parse stdout.
fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = vibefid_cmd(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("command should not crash");
    assert!(
        output.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("--json should produce valid JSON")
}

/// Run a failing command with `--json` and parse the error envelope from stderr.
fn run_json_err(dir: &Path, args: &[&str]) -> Value {
    let output = vibefid_cmd(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("command should not crash");
    assert!(!output.status.success(), "{args:?} unexpectedly succeeded");
    serde_json::from_slice(&output.stderr).expect("error envelope should be JSON")
}

// ---------------------------------------------------------------------------
// traits
// ---------------------------------------------------------------------------

#[test]
fn og_fid_rolls_prize_pristine() {
    let dir = TempDir::new().expect("temp dir");
    let json = run_json(dir.path(), &["traits", "50"]);
    assert_eq!(json["fid"], 50);
    assert_eq!(json["foil"], "Prize");
    assert_eq!(json["wear"], "Pristine");
    assert_eq!(json["band"], 0);
    assert_eq!(json["deterministic"], true);
    assert!(json.get("extra_seed").is_none());
}

#[test]
fn deterministic_roll_is_reproducible() {
    let dir = TempDir::new().expect("temp dir");
    let first = run_json(dir.path(), &["traits", "2000000"]);
    let second = run_json(dir.path(), &["traits", "2000000"]);
    assert_eq!(first, second);
    assert_eq!(first["band"], 6);

    let foil = first["foil"].as_str().expect("foil");
    assert!(foil == "Standard" || foil == "None", "unexpected foil {foil}");
    let wear = first["wear"].as_str().expect("wear");
    assert!(
        wear == "Moderately Played" || wear == "Heavily Played",
        "unexpected wear {wear}"
    );
}

#[test]
fn explicit_extra_seed_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let json = run_json(dir.path(), &["traits", "300000", "--extra-seed", "-12.5"]);
    assert_eq!(json["deterministic"], false);
    assert_eq!(json["extra_seed"], -12.5);
    assert_eq!(json["seeds"]["foil"], 299_987.5);
    assert_eq!(json["seeds"]["wear"], 599_987.5);
}

#[test]
fn text_mode_is_tab_separated() {
    let dir = TempDir::new().expect("temp dir");
    vibefid_cmd(dir.path())
        .args(["--format", "text", "traits", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1\tPrize\tPristine"));
}

#[test]
fn invalid_fid_fails_at_parse() {
    let dir = TempDir::new().expect("temp dir");
    vibefid_cmd(dir.path())
        .args(["traits", "not-a-fid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a non-negative integer"));
}

// ---------------------------------------------------------------------------
// power / metadata
// ---------------------------------------------------------------------------

#[test]
fn power_breakdown_for_mythic_og() {
    let dir = TempDir::new().expect("temp dir");
    let json = run_json(dir.path(), &["power", "1", "--score", "0.995"]);
    assert_eq!(json["rarity"], "Mythic");
    assert_eq!(json["base"], 800);
    assert_eq!(json["power"], 21_600);
    assert_eq!(json["traits"]["foil"], "Prize");
}

#[test]
fn out_of_range_score_reports_error_code() {
    let dir = TempDir::new().expect("temp dir");
    let json = run_json_err(dir.path(), &["power", "1", "--score", "1.5"]);
    assert_eq!(json["error"]["error_code"], "E2003");
    assert!(json["error"]["suggestion"].is_string());
}

#[test]
fn metadata_uses_configured_collection() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("vibefid.toml"),
        "[metadata]\ncollection_name = \"VibeFID Test\"\nimage_base_url = \"https://img.test\"\n",
    )
    .expect("write config");

    let json = run_json(
        dir.path(),
        &["metadata", "77", "--score", "0.9", "--username", "alice"],
    );
    let name = json["name"].as_str().expect("name");
    assert!(name.contains("VibeFID Test"), "name was {name}");
    assert!(
        json["image"]
            .as_str()
            .expect("image")
            .starts_with("https://img.test")
    );

    let attrs = json["attributes"].as_array().expect("attributes");
    let trait_types: Vec<&str> = attrs
        .iter()
        .map(|a| a["trait_type"].as_str().expect("trait_type"))
        .collect();
    assert_eq!(
        trait_types,
        ["FID", "Rarity", "Foil", "Wear", "Power", "Neynar Score", "Username"]
    );
    assert_eq!(attrs[1]["value"], "Legendary");
}

#[test]
fn broken_config_reports_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[metadata\n").expect("write config");

    let path_str = path.to_str().expect("utf8 path");
    let json = run_json_err(dir.path(), &["--config", path_str, "config"]);
    assert_eq!(json["error"]["error_code"], "E1002");
}

// ---------------------------------------------------------------------------
// tables / distribution
// ---------------------------------------------------------------------------

#[test]
fn tables_lists_seven_bands() {
    let dir = TempDir::new().expect("temp dir");
    let json = run_json(dir.path(), &["tables"]);
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["max_fid"], 5000);
    assert!(rows[6]["max_fid"].is_null());
}

#[test]
fn tables_filter_by_fid() {
    let dir = TempDir::new().expect("temp dir");
    let json = run_json(dir.path(), &["tables", "--fid", "20000"]);
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["band"], 1);
}

#[test]
fn distribution_counts_sum_to_total() {
    let dir = TempDir::new().expect("temp dir");
    let json = run_json(dir.path(), &["distribution", "--from", "4990", "--to", "5010"]);
    assert_eq!(json["total"], 21);

    let foil_sum: u64 = json["foil"]
        .as_object()
        .expect("foil map")
        .values()
        .map(|v| v.as_u64().expect("count"))
        .sum();
    assert_eq!(foil_sum, 21);
}

#[test]
fn reversed_range_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let json = run_json_err(dir.path(), &["distribution", "--from", "10", "--to", "1"]);
    assert_eq!(json["error"]["error_code"], "E2004");
}

#[test]
fn completions_emit_script() {
    let dir = TempDir::new().expect("temp dir");
    vibefid_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vibefid"));
}
