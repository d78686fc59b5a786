//! Bounded random sample data.
//!
//! Every draw goes through one process-wide generator so that a single
//! `--seed` makes a whole run reproducible, banner included. The list
//! helpers come in a loop flavor and an iterator flavor that draw
//! identically under the same seed.

use std::collections::BTreeMap;
use std::iter;
use std::sync::{Mutex, OnceLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

/// Installs the process generator. The first call wins; later calls are
/// ignored. `None` seeds from OS entropy, which is also the fallback when
/// nobody calls this at all.
pub fn set_seed(seed: Option<u64>) {
    let rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let _ = RNG.set(Mutex::new(rng));
}

fn with_rng<T>(draw: impl FnOnce(&mut StdRng) -> T) -> T {
    let rng = RNG.get_or_init(|| Mutex::new(StdRng::from_os_rng()));
    let mut guard = rng.lock().expect("sample data RNG lock poisoned");
    draw(&mut guard)
}

/// Uniform draw from `[min, max]`, both ends inclusive.
///
/// Callers must keep `min <= max`; an inverted range panics.
pub fn random_int(min: i32, max: i32) -> i32 {
    with_rng(|rng| rng.random_range(min..=max))
}

/// A list of up to `max_items - 1` draws from `[min_value, max_value]`.
///
/// The length itself is random, so the result is often short and may be
/// empty. `max_items` of zero is allowed and always yields an empty list.
pub fn random_list(max_items: usize, min_value: i32, max_value: i32) -> Vec<i32> {
    with_rng(|rng| list_with(rng, max_items, min_value, max_value))
}

/// [`random_list`] built through an iterator chain instead of a loop.
/// Same draws, same order, same bounds.
pub fn random_list_by_iter(max_items: usize, min_value: i32, max_value: i32) -> Vec<i32> {
    with_rng(|rng| list_by_iter_with(rng, max_items, min_value, max_value))
}

/// A squares table over a short consecutive run of keys.
///
/// Keys start somewhere in `[1, max_value - max_items]` and there are at
/// most `max_items` of them; every value is its key squared. Callers must
/// keep `max_value > max_items >= 1`. The ordered map is what keeps the
/// keys unique and sorted.
pub fn random_map(max_value: i32, max_items: i32) -> BTreeMap<i32, i32> {
    with_rng(|rng| map_with(rng, max_value, max_items))
}

fn list_with(rng: &mut StdRng, max_items: usize, min_value: i32, max_value: i32) -> Vec<i32> {
    if max_items == 0 {
        return Vec::new();
    }
    let len: usize = rng.random_range(0..max_items);
    let mut values: Vec<i32> = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(rng.random_range(min_value..=max_value));
    }
    values
}

fn list_by_iter_with(
    rng: &mut StdRng,
    max_items: usize,
    min_value: i32,
    max_value: i32,
) -> Vec<i32> {
    if max_items == 0 {
        return Vec::new();
    }
    let len: usize = rng.random_range(0..max_items);
    iter::repeat_with(|| rng.random_range(min_value..=max_value))
        .take(len)
        .collect()
}

fn map_with(rng: &mut StdRng, max_value: i32, max_items: i32) -> BTreeMap<i32, i32> {
    let min: i32 = rng.random_range(1..=max_value - max_items);
    let span: i32 = rng.random_range(1..=max_items);
    (min..min + span).map(|key| (key, key * key)).collect()
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
    fn random_int_stays_inside_inclusive_bounds() {
        for _ in 0..500 {
            let value: i32 = random_int(-3, 3);
            assert!((-3..=3).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn random_int_degenerate_range_is_that_value() {
        assert_eq!(random_int(7, 7), 7);
    }

    #[test]
    fn random_list_len_stays_strictly_below_max_items() {
        for _ in 0..200 {
            let list: Vec<i32> = random_list(5, 0, 9);
            assert!(list.len() < 5, "too long: {list:?}");
            for value in &list {
                assert!((0..=9).contains(value), "out of range: {value}");
            }
        }
    }

    #[test]
    fn random_list_of_zero_items_is_empty() {
        assert!(random_list(0, 1, 2).is_empty());
        assert!(random_list_by_iter(0, 1, 2).is_empty());
    }

    #[test]
    fn loop_and_iterator_lists_draw_identically() {
        let mut lhs: StdRng = StdRng::seed_from_u64(7);
        let mut rhs: StdRng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                list_with(&mut lhs, 12, -50, 50),
                list_by_iter_with(&mut rhs, 12, -50, 50)
            );
        }
    }

    #[test]
    fn same_seed_draws_the_same_list() {
        let mut lhs: StdRng = StdRng::seed_from_u64(42);
        let mut rhs: StdRng = StdRng::seed_from_u64(42);
        assert_eq!(list_with(&mut lhs, 100, -500, 500), list_with(&mut rhs, 100, -500, 500));
    }

    #[test]
    fn random_map_holds_squares_of_consecutive_keys() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let map: BTreeMap<i32, i32> = map_with(&mut rng, 100, 7);
            assert!(!map.is_empty() && map.len() <= 7, "bad size: {}", map.len());
            for (key, value) in &map {
                assert!((1..100).contains(key), "key out of range: {key}");
                assert_eq!(key * key, *value);
            }
            let keys: Vec<i32> = map.keys().copied().collect();
            for pair in keys.windows(2) {
                assert_eq!(pair[0] + 1, pair[1], "keys not consecutive: {keys:?}");
            }
        }
    }
}
