//! The iterator pipeline from both ends.
//!
//! Starts with why internal iteration earns its keep, makes laziness
//! observable, then walks the builders, the adapters and the consumers.
//! The parallel comparisons lean on rayon's bridge; output order under
//! parallelism is whatever the worker threads got to first.

use std::cell::Cell;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::iter;

use rayon::prelude::*;

use rustour_common::config::Config;
use rustour_common::output::{self, say_iter};
use rustour_common::random;
use rustour_common::say;

const HIGH_WATER: i32 = 970;

const WORDS: [&str; 5] = ["m", "thr33", "Awesome", "Consulting", "Corporation"];

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    quick_intro(cfg);
    why_pipelines(cfg);
    lazy_and_eager(cfg);
    building(cfg);
    collecting(cfg);
    adapters(cfg);
    consumers(cfg);
    Ok(())
}

fn quick_intro(cfg: &Config) {
    output::section("quick intro", cfg.quiet);

    let samples: Vec<i32> = random::random_list(100, 500, 1000);

    // Spelled out: borrow an iterator, keep what passes, collect.
    let high: Vec<i32> = samples.iter().copied().filter(|&v| v > HIGH_WATER).collect();
    for value in &high {
        say!("high water: sequential =", value);
    }
    say!();

    // The same chain without the intermediate vec.
    samples.iter().filter(|&&v| v > HIGH_WATER).for_each(|value| {
        say!("high water: one-liner =", value);
    });
    say!();

    // rayon's bridge: same shape, its own thread pool underneath.
    samples.par_iter().filter(|&&v| v > HIGH_WATER).for_each(|value| {
        say!("high water: parallel =", value);
    });
}

fn why_pipelines(cfg: &Config) {
    output::section("why pipelines", cfg.quiet);

    let samples: Vec<i32> = random::random_list(100, -500, 500);

    // Problem: sum every positive value.
    //
    // The indexed way babysits the traversal and the bounds; the chain
    // states the problem and nothing else; the parallel chain is the
    // same chain with one call swapped.
    say!("loop sum =", sum_positives_loop(&samples));
    say!("pipeline sum =", sum_positives_iter(&samples));
    say!("parallel sum =", sum_positives_par(&samples));
}

pub fn sum_positives_loop(values: &[i32]) -> i64 {
    let mut sum: i64 = 0;
    for i in 0..values.len() {
        if values[i] > 0 {
            sum += i64::from(values[i]);
        }
    }
    sum
}

pub fn sum_positives_iter(values: &[i32]) -> i64 {
    values.iter().filter(|&&v| v > 0).map(|&v| i64::from(v)).sum()
}

pub fn sum_positives_par(values: &[i32]) -> i64 {
    values.par_iter().filter(|&&v| v > 0).map(|&v| i64::from(v)).sum()
}

fn lazy_and_eager(cfg: &Config) {
    output::section("lazy adapters, eager consumers", cfg.quiet);

    let values: Vec<i32> = vec![1, 2, 3, 4, 5];
    let touched: Cell<usize> = Cell::new(0);

    let doubled = values.iter().map(|&v| {
        touched.set(touched.get() + 1);
        v * 2
    });
    say!("after building the chain, elements touched:", touched.get());

    let total: i32 = doubled.sum();
    say!("after consuming it:", touched.get(), "touched, total =", total);
}

fn building(cfg: &Config) {
    output::section("building iterators", cfg.quiet);

    say_iter("from an array", [1, 2, 3, 1, 2, 3]);
    say_iter("from a vec", vec![4, 5, 6]);
    say_iter("from a range", 1..=5);
    say_iter("from a string", "abc".chars());
    say_iter("once", iter::once(42));

    // repeat_with generates forever; take decides how much is enough.
    let drawn: Vec<i32> = iter::repeat_with(|| random::random_int(-10, 10)).take(4).collect();
    say_iter("repeat_with", drawn);

    // successors is iterate-until in one place: seed, stop rule, step.
    say_iter("successors", climb(10, 18, 2));
}

/// `start` stepping by `step` while at or below `limit`.
pub fn climb(start: i32, limit: i32, step: i32) -> Vec<i32> {
    iter::successors(Some(start), |&v| (v < limit).then_some(v + step)).collect()
}

fn collecting(cfg: &Config) {
    output::section("collecting", cfg.quiet);

    let noisy: [i32; 11] = [4, 3, 2, 1, 2, 3, 4, 1, 2, 3, 1];

    let unique: HashSet<i32> = noisy.iter().copied().collect();
    say!("as a set,", noisy.len(), "values shrink to", unique.len());

    let kept: Vec<i32> = noisy.iter().copied().collect();
    say_iter("as a vec", kept);

    let squares: BTreeMap<i32, i32> = [9, 3, 5, 1, 13, 2].iter().map(|&k| (k, k * k)).collect();
    for (key, value) in &squares {
        say!("square of", key, "=", value);
    }

    let word: String = ['r', 'u', 's', 't'].iter().collect();
    say!("collected string:", word);
}

fn adapters(cfg: &Config) {
    output::section("adapters", cfg.quiet);

    let samples: Vec<i32> = random::random_list(20, -100, 100);
    say_iter("samples", &samples);

    say_iter("filter: positives", samples.iter().filter(|&&v| v > 0));
    say_iter("map: uppercase", WORDS.iter().map(|w| w.to_uppercase()));

    say_iter("sorted", sorted(&samples));
    say_iter("reverse sorted", reverse_sorted(&samples));

    let phrase: [&[&str]; 3] =
        [&["The", "quick", "brown", "fox"], &["jumps", "over"], &["the", "lazy", "dog"]];
    say_iter("flat_map", flatten_phrase(&phrase));

    // flatten is flat_map with an identity step.
    let pairs: [[i32; 2]; 3] = [[1, 2], [3, 4], [5, 6]];
    say_iter("flatten", pairs.iter().flatten());

    let ramp: [i32; 6] = [1, 2, 3, 10, 2, 1];
    say_iter("take_while < 4", ramp.iter().take_while(|&&v| v < 4));
    say_iter("skip_while < 4", ramp.iter().skip_while(|&&v| v < 4));
}

/// No sorted adapter on `Iterator`; collect into a buffer and sort that.
pub fn sorted(values: &[i32]) -> Vec<i32> {
    let mut buffer: Vec<i32> = values.to_vec();
    buffer.sort_unstable();
    buffer
}

pub fn reverse_sorted(values: &[i32]) -> Vec<i32> {
    let mut buffer: Vec<i32> = values.to_vec();
    buffer.sort_unstable_by_key(|&v| Reverse(v));
    buffer
}

/// One nested level flattened away; each inner list contributes its words
/// in order.
pub fn flatten_phrase(lists: &[&[&str]]) -> Vec<String> {
    lists.iter().flat_map(|list| list.iter().map(|word| word.to_string())).collect()
}

fn consumers(cfg: &Config) {
    output::section("consumers", cfg.quiet);

    let fixed: Vec<i32> = vec![2, 3, 4, 5, 10];
    let drawn: Vec<i32> = random::random_list(12, -200, 400);

    consume(&fixed, "fixed");
    consume(&drawn, "random");
}

fn consume(values: &[i32], label: &str) {
    say!();
    say!(label, "=", format!("{values:?}"));
    say!("count =", values.len());

    // reduce folds pairwise from the elements; fold starts from a seed.
    if let Some(sum) = values.iter().copied().reduce(|a, b| a + b) {
        say!("reduce: sum =", sum);
    }
    let product: i128 = values.iter().fold(1i128, |acc, &v| acc * i128::from(v));
    say!("fold: product =", product);

    say!("any equal to 10?", values.iter().any(|&v| v == 10));
    say!("all positive?", values.iter().all(|&v| v > 0));

    if let Some(odd) = first_odd(values) {
        say!("find: first odd =", odd);
    }
    if let Some(at) = values.iter().position(|&v| v % 2 != 0) {
        say!("position: first odd sits at", at);
    }

    if let Some(min) = values.iter().min() {
        say!("min =", min);
    }
    if let Some(max) = values.iter().max() {
        say!("max =", max);
    }
}

/// First odd element. `% 2 != 0` rather than `== 1`, so negative odds
/// count too.
pub fn first_odd(values: &[i32]) -> Option<i32> {
    values.iter().copied().find(|v| v % 2 != 0)
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
    fn the_three_sums_agree() {
        let values: Vec<i32> = random::random_list(64, -500, 500);
        let by_loop: i64 = sum_positives_loop(&values);
        assert_eq!(by_loop, sum_positives_iter(&values));
        assert_eq!(by_loop, sum_positives_par(&values));
    }

    #[test]
    fn negative_values_never_reach_the_sum() {
        assert_eq!(sum_positives_iter(&[-5, -1, 3, 4]), 7);
        assert_eq!(sum_positives_iter(&[-5, -1]), 0);
        assert_eq!(sum_positives_iter(&[]), 0);
    }

    #[test]
    fn adapters_touch_nothing_until_consumed() {
        let touched: Cell<usize> = Cell::new(0);
        let chain = [1, 2, 3].iter().map(|&v| {
            touched.set(touched.get() + 1);
            v * 2
        });
        assert_eq!(touched.get(), 0);
        let total: i32 = chain.sum();
        assert_eq!((touched.get(), total), (3, 12));
    }

    #[test]
    fn climb_stops_where_the_rule_says() {
        assert_eq!(climb(10, 18, 2), vec![10, 12, 14, 16, 18]);
        assert_eq!(climb(7, 7, 3), vec![7]);
    }

    #[test]
    fn sort_helpers_mirror_each_other() {
        let values: Vec<i32> = vec![3, -1, 4, 1, -5, 9];
        let mut reversed: Vec<i32> = reverse_sorted(&values);
        reversed.reverse();
        assert_eq!(sorted(&values), reversed);
        assert_eq!(sorted(&values), vec![-5, -1, 1, 3, 4, 9]);
    }

    #[test]
    fn flattening_restores_the_sentence() {
        let phrase: [&[&str]; 3] =
            [&["The", "quick", "brown", "fox"], &["jumps", "over"], &["the", "lazy", "dog"]];
        assert_eq!(
            flatten_phrase(&phrase).join(" "),
            "The quick brown fox jumps over the lazy dog"
        );
    }

    #[test]
    fn first_odd_counts_negatives_as_odd() {
        assert_eq!(first_odd(&[2, -4, -3, 5]), Some(-3));
        assert_eq!(first_odd(&[2, 4]), None);
    }
}
