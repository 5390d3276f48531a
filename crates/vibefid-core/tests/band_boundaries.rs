//! Band boundary tests for the foil and wear tables.
//!
//! Covers:
//!   - every threshold and threshold ± 1 resolves to the expected band
//!   - desirability never improves as FID grows
//!   - documented end-to-end examples

use vibefid_core::roll::{Weighted, total_weight, weighted_roll};
use vibefid_core::tables::{
    BAND_THRESHOLDS, FOIL_BANDS, WEAR_BANDS, foil_table_for_fid, wear_table_for_fid,
};
use vibefid_core::{ExtraSeed, Fid, FidTraits, Foil, Wear};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fid(value: u64) -> Fid {
    Fid::new(value).expect("valid fid")
}

/// Expected desirability rank (0 = best) weighted by table probability.
fn expected_rank<T: Copy>(choices: &[Weighted<T>], rank: impl Fn(T) -> u32) -> f64 {
    let total = f64::from(total_weight(choices));
    choices
        .iter()
        .map(|choice| f64::from(rank(choice.value)) * f64::from(choice.weight))
        .sum::<f64>()
        / total
}

/// Weight of the best value (rank 0) in a table.
fn top_weight<T: Copy>(choices: &[Weighted<T>], rank: impl Fn(T) -> u32) -> u32 {
    choices
        .iter()
        .filter(|choice| rank(choice.value) == 0)
        .map(|choice| choice.weight)
        .sum()
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

#[test]
fn thresholds_are_inclusive_upper_bounds() {
    for (band, &threshold) in BAND_THRESHOLDS.iter().enumerate() {
        assert_eq!(
            foil_table_for_fid(fid(threshold - 1)),
            FOIL_BANDS[band].choices,
            "foil below {threshold}"
        );
        assert_eq!(
            foil_table_for_fid(fid(threshold)),
            FOIL_BANDS[band].choices,
            "foil at {threshold}"
        );
        assert_eq!(
            foil_table_for_fid(fid(threshold + 1)),
            FOIL_BANDS[band + 1].choices,
            "foil above {threshold}"
        );

        assert_eq!(
            wear_table_for_fid(fid(threshold - 1)),
            WEAR_BANDS[band].choices,
            "wear below {threshold}"
        );
        assert_eq!(
            wear_table_for_fid(fid(threshold)),
            WEAR_BANDS[band].choices,
            "wear at {threshold}"
        );
        assert_eq!(
            wear_table_for_fid(fid(threshold + 1)),
            WEAR_BANDS[band + 1].choices,
            "wear above {threshold}"
        );
    }
}

#[test]
fn crossing_a_threshold_never_improves_odds() {
    for &threshold in &BAND_THRESHOLDS {
        let foil_at = foil_table_for_fid(fid(threshold));
        let foil_after = foil_table_for_fid(fid(threshold + 1));
        assert!(
            expected_rank(foil_after, Foil::rank) > expected_rank(foil_at, Foil::rank),
            "foil at {threshold}"
        );
        assert!(top_weight(foil_after, Foil::rank) <= top_weight(foil_at, Foil::rank));

        let wear_at = wear_table_for_fid(fid(threshold));
        let wear_after = wear_table_for_fid(fid(threshold + 1));
        assert!(
            expected_rank(wear_after, Wear::rank) > expected_rank(wear_at, Wear::rank),
            "wear at {threshold}"
        );
        assert!(top_weight(wear_after, Wear::rank) <= top_weight(wear_at, Wear::rank));
    }
}

#[test]
fn every_band_sums_to_one_hundred() {
    for band in FOIL_BANDS.iter() {
        assert_eq!(total_weight(band.choices), 100);
    }
    for band in WEAR_BANDS.iter() {
        assert_eq!(total_weight(band.choices), 100);
    }
}

#[test]
fn tables_contain_no_zero_weights() {
    for band in FOIL_BANDS.iter() {
        assert!(band.choices.iter().all(|c| c.weight > 0));
    }
    for band in WEAR_BANDS.iter() {
        assert!(band.choices.iter().all(|c| c.weight > 0));
    }
}

#[test]
fn absent_values_are_never_rolled() {
    // Band 6 carries no Prize foil and no Pristine wear.
    for raw in 1_200_001..1_205_001 {
        let traits = FidTraits::roll(fid(raw));
        assert_ne!(traits.foil, Foil::Prize, "fid {raw}");
        assert!(
            matches!(traits.wear, Wear::ModeratelyPlayed | Wear::HeavilyPlayed),
            "fid {raw}"
        );
    }
}

// ---------------------------------------------------------------------------
// End-to-end examples
// ---------------------------------------------------------------------------

#[test]
fn fid_50_and_5000_are_prize_pristine() {
    let expected = FidTraits {
        foil: Foil::Prize,
        wear: Wear::Pristine,
    };
    assert_eq!(FidTraits::roll(fid(50)), expected);
    assert_eq!(FidTraits::roll(fid(5000)), expected);
}

#[test]
fn fid_two_million_is_reproducible() {
    let first = FidTraits::roll(fid(2_000_000));
    assert!(matches!(first.foil, Foil::Standard | Foil::None));
    assert!(matches!(first.wear, Wear::ModeratelyPlayed | Wear::HeavilyPlayed));
    for _ in 0..10 {
        assert_eq!(FidTraits::roll(fid(2_000_000)), first);
    }
}

#[test]
fn fid_two_million_matches_manual_roll() {
    let foil = weighted_roll(2_000_000.0, foil_table_for_fid(fid(2_000_000)));
    let wear = weighted_roll(4_000_000.0, wear_table_for_fid(fid(2_000_000)));
    let traits = FidTraits::roll(fid(2_000_000));
    assert_eq!(Some(traits.foil), foil);
    assert_eq!(Some(traits.wear), wear);
}

#[test]
fn reroll_with_timestamps_varies() {
    let base = fid(50_000);
    let mut seen = std::collections::HashSet::new();
    for offset in 0..100_i64 {
        let extra = ExtraSeed::from_millis(1_735_689_600_000 + offset * 1_013);
        seen.insert(FidTraits::reroll(base, extra));
    }
    assert!(seen.len() > 1);
}
