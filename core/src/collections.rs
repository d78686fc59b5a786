//! Collections built in one expression.
//!
//! Literal constructors against push-one-at-a-time, borrowed read-only
//! views, a shared table initialized on first touch, and the empty
//! constructors with their inferred element types.

use std::collections::{BTreeMap, HashMap, HashSet};

use once_cell::sync::Lazy;

use rustour_common::config::Config;
use rustour_common::output::{self, say_iter};
use rustour_common::say;

/// A shared immutable table, built on first touch and never again.
static CUBES: Lazy<BTreeMap<i32, i32>> = Lazy::new(|| (1..=4).map(|n| (n, n * n * n)).collect());

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    literal_construction(cfg);
    read_only_views(cfg);
    shared_tables(cfg);
    empty_collections(cfg);
    Ok(())
}

fn literal_construction(cfg: &Config) {
    output::section("literal construction", cfg.quiet);

    // One element at a time...
    let mut pushed: Vec<i32> = Vec::new();
    pushed.push(1);
    pushed.push(3);
    pushed.push(5);

    // ...or the whole value at once.
    let literal: Vec<i32> = vec![1, 3, 5];
    say!("pushed == literal:", pushed == literal);

    let fixed: [i32; 5] = [1, 3, 5, 3, 1];
    say_iter("array literal", fixed);

    let names: HashMap<i32, &str> = HashMap::from([(1, "one"), (2, "two"), (3, "three")]);
    say!("the map knows 2 as", names.get(&2).copied().unwrap_or("?"));

    let ordered: BTreeMap<i32, &str> = BTreeMap::from([(3, "three"), (1, "one"), (2, "two")]);
    say_iter("ordered keys", ordered.keys());

    // Duplicates dissolve on the way in.
    let unique: HashSet<i32> = HashSet::from([1, 2, 3, 2, 1]);
    say!("set built from five values holds", unique.len());
}

fn read_only_views(cfg: &Config) {
    output::section("read-only views", cfg.quiet);

    let inventory: Vec<&str> = vec!["rope", "lantern", "compass"];

    // The borrow IS the read-only view: no wrapper type, no runtime
    // refusal, just no `push` to call on `&[T]`.
    let view: &[&str] = &inventory;
    say!("first through the view:", view.first().copied().unwrap_or("-"));
    say!("view length =", view.len());
}

fn shared_tables(cfg: &Config) {
    output::section("shared tables", cfg.quiet);

    say!("cube of 3 =", CUBES.get(&3).copied().unwrap_or(0));
    say_iter("all cubes", CUBES.values());
}

fn empty_collections(cfg: &Config) {
    output::section("empty collections", cfg.quiet);

    let no_numbers: Vec<i32> = Vec::new();
    let no_names: HashMap<i32, String> = HashMap::new();
    let no_flags: HashSet<bool> = HashSet::new();
    say!("empty sizes:", no_numbers.len(), no_names.len(), no_flags.len());
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubes_table_is_complete() {
        assert_eq!(CUBES.len(), 4);
        assert_eq!(CUBES.get(&1), Some(&1));
        assert_eq!(CUBES.get(&3), Some(&27));
        assert_eq!(CUBES.get(&4), Some(&64));
        assert_eq!(CUBES.get(&5), None);
    }

    #[test]
    fn literal_maps_resolve_their_keys() {
        let names: HashMap<i32, &str> = HashMap::from([(1, "one"), (2, "two")]);
        assert_eq!(names.get(&2), Some(&"two"));
        assert_eq!(names.get(&9), None);
    }

    #[test]
    fn sets_built_from_literals_deduplicate() {
        let unique: HashSet<i32> = HashSet::from([1, 2, 3, 2, 1]);
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn a_borrowed_view_tracks_its_owner() {
        let inventory: Vec<i32> = vec![10, 20];
        let view: &[i32] = &inventory;
        assert_eq!(view.first(), Some(&10));
        assert_eq!(view.len(), inventory.len());
    }
}
