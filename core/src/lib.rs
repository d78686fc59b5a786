//! The demonstration modules, one per feature area.
//!
//! Each module owns its topic end to end and exposes a single
//! `run(&Config)`; the [`DEMOS`] table fixes the order a full tour walks
//! them in and gives the CLI and the test suite one place to look things
//! up by name.

use rustour_common::config::Config;

pub mod closures;
pub mod collections;
pub mod datetime;
pub mod iterators;
pub mod loops;
pub mod process;
pub mod resources;
pub mod strings;
pub mod traits;

/// One runnable demonstration: a stable name for the CLI and the tests,
/// a headline for the terminal, and the entry point itself.
pub struct Demo {
    pub name: &'static str,
    pub title: &'static str,
    pub run: fn(&Config) -> anyhow::Result<()>,
}

/// Every demonstration, in tour order.
pub const DEMOS: &[Demo] = &[
    Demo { name: "resources", title: "scope-bound resources", run: resources::run },
    Demo { name: "closures", title: "closures", run: closures::run },
    Demo { name: "iterators", title: "iterator pipelines", run: iterators::run },
    Demo { name: "loops", title: "loops and for_each", run: loops::run },
    Demo { name: "datetime", title: "dates and times", run: datetime::run },
    Demo { name: "traits", title: "traits with provided code", run: traits::run },
    Demo { name: "collections", title: "collection literals", run: collections::run },
    Demo { name: "strings", title: "string utilities", run: strings::run },
    Demo { name: "process", title: "process introspection", run: process::run },
];

/// Looks a demonstration up by its CLI name.
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_demo_is_findable_by_name() {
        for demo in DEMOS {
            assert!(find(demo.name).is_some(), "missing: {}", demo.name);
        }
        assert!(find("nonesuch").is_none());
    }

    #[test]
    fn demo_names_are_unique() {
        let mut names: Vec<&str> = DEMOS.iter().map(|demo| demo.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEMOS.len());
    }
}
