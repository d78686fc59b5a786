#![cfg(test)]
use rustour_common::config::Config;
use rustour_common::random;
use rustour_core::{DEMOS, find};

/// Shared setup: seeded so sample data repeats, fully quiet so the suite
/// produces result lines and nothing else.
fn tour_config() -> Config {
    random::set_seed(Some(7));
    Config { quiet: 2, no_banner: true, no_color: true, seed: Some(7) }
}

/// Every demonstration is expected to run clean on its own: whatever it
/// prints, the entry point comes back `Ok`.
#[test]
fn every_demonstration_runs_clean() {
    let cfg: Config = tour_config();
    for demo in DEMOS {
        let result = (demo.run)(&cfg);
        assert!(result.is_ok(), "{} failed: {:?}", demo.name, result.err());
    }
}

/// The full tour is just the table walked in order; the first failure
/// would stop it the way the CLI stops.
#[test]
fn the_full_tour_runs_in_order() {
    let cfg: Config = tour_config();
    let outcome: anyhow::Result<()> = DEMOS.iter().try_for_each(|demo| (demo.run)(&cfg));
    assert!(outcome.is_ok(), "tour failed: {:?}", outcome.err());
}

#[test]
fn lookup_by_name_matches_the_table() {
    for demo in DEMOS {
        let found = find(demo.name).expect("every listed demonstration is findable");
        assert_eq!(found.title, demo.title);
    }
    assert!(find("").is_none());
}

/// The narrated family logs instead of printing; with no subscriber
/// installed here the events go nowhere, and the run must still be `Ok`.
#[test]
fn narrated_demonstrations_need_no_subscriber() {
    let cfg: Config = tour_config();
    let demo = find("resources").expect("resources demonstration exists");
    assert!((demo.run)(&cfg).is_ok());
}
