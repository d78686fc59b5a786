use std::collections::BTreeMap;

use rustour_common::config::Config;
use rustour_common::output::{self, say_iter};
use rustour_common::random;
use rustour_common::say;

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    list_traversal(cfg);
    removal_while_traversing(cfg);
    map_traversal(cfg);
    Ok(())
}

fn list_traversal(cfg: &Config) {
    output::section("list traversal", cfg.quiet);

    let values: Vec<i32> = random::random_list(5, -1000, 1000);
    say!("values =", format!("{values:?}"));

    // Indexing with explicit bounds: the loop owns the bookkeeping.
    for i in 0..values.len() {
        say!("indexed loop: value =", values[i]);
    }

    // The borrowing `for`: the bookkeeping is gone.
    for value in &values {
        say!("for loop: value =", value);
    }

    // The iterator spelled out, which is all `for` desugars to.
    let mut cursor = values.iter();
    while let Some(value) = cursor.next() {
        say!("while-let: value =", value);
    }

    // Internal iteration: hand the body over, named or anonymous.
    values.iter().for_each(announce_value);
    values.iter().for_each(|value| {
        say!("for_each with closure: value =", value);
    });
}

/// A reusable consumer `for_each` can take by name.
fn announce_value(value: &i32) {
    say!("for_each with fn: value =", value);
}

fn removal_while_traversing(cfg: &Config) {
    output::section("removal while traversing", cfg.quiet);

    let values: Vec<i32> = random::random_list(8, -50, 50);
    say!("values =", format!("{values:?}"));

    // Calling `remove` inside `for value in &values` does not get past
    // the borrow checker: the loop holds the vec borrowed while `remove`
    // wants it mutable. The index-juggling workaround is still
    // expressible, shifted elements and all...
    say!("kept by hand =", format!("{:?}", drop_negatives_by_index(values.clone())));

    // ...but retain is the supported spelling.
    say!("kept by retain =", format!("{:?}", drop_negatives_retain(values)));
}

/// Removes negatives by index, taking care not to hop over the element
/// that shifts into the vacated slot.
pub fn drop_negatives_by_index(mut values: Vec<i32>) -> Vec<i32> {
    let mut i: usize = 0;
    while i < values.len() {
        if values[i] < 0 {
            values.remove(i);
        } else {
            i += 1;
        }
    }
    values
}

pub fn drop_negatives_retain(mut values: Vec<i32>) -> Vec<i32> {
    values.retain(|&v| v >= 0);
    values
}

fn map_traversal(cfg: &Config) {
    output::section("map traversal", cfg.quiet);

    let squares: BTreeMap<i32, i32> = random::random_map(100, 7);

    for (key, value) in &squares {
        say!("for loop: key =", key, ", value =", value);
    }

    squares.iter().for_each(|(key, value)| {
        say!("for_each with closure: key =", key, ", value =", value);
    });

    squares.iter().for_each(announce_entry);

    say_iter("keys", squares.keys());
    say_iter("values", squares.values());
}

/// The tuple-taking consumer, reusable across maps.
fn announce_entry((key, value): (&i32, &i32)) {
    say!("for_each with fn: key =", key, ", value =", value);
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
    fn index_removal_and_retain_agree() {
        let cases: Vec<Vec<i32>> = vec![
            vec![],
            vec![-1, -2, -3],
            vec![1, 2, 3],
            vec![-1, 2, -3, 4, -5],
            vec![5, -1, -1, -1, 9],
        ];
        for case in cases {
            assert_eq!(
                drop_negatives_by_index(case.clone()),
                drop_negatives_retain(case.clone()),
                "diverged on {case:?}"
            );
        }
    }

    #[test]
    fn consecutive_negatives_do_not_get_skipped() {
        // The classic index bug: removing shifts the next element into
        // the current slot; skipping ahead would miss it.
        assert_eq!(drop_negatives_by_index(vec![7, -1, -2, 8]), vec![7, 8]);
        assert_eq!(drop_negatives_by_index(vec![-1, -2]), Vec::<i32>::new());
    }

    #[test]
    fn retain_keeps_zero() {
        assert_eq!(drop_negatives_retain(vec![-1, 0, 1]), vec![0, 1]);
    }
}
