//! Closures next to their named-implementation ancestors.
//!
//! Walks the shortening steps from a full trait implementor down to a
//! one-line closure, then captures, the three function traits, and plain
//! `fn` items passed where closures are expected.

use rustour_common::config::Config;
use rustour_common::output::{self, join_fragments};
use rustour_common::say;

pub const INTRO_NAME: &str = "Hi, I am";
pub const AND: &str = "and";
pub const INTRO_JOB: &str = "I am a";

/// The single-method seam a closure can stand in for.
pub trait Introduce {
    fn introduce(&self, name: &str, job: &str) -> String;
}

/// The named-implementor way: a whole type for one method.
pub struct FormalIntroduction;

impl Introduce for FormalIntroduction {
    fn introduce(&self, name: &str, job: &str) -> String {
        intro_line(name, job)
    }
}

/// The line every introduction builds, long form or short.
pub fn intro_line(name: &str, job: &str) -> String {
    join_fragments(&[&INTRO_NAME, &name, &AND, &INTRO_JOB, &job])
}

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    shrinking_forms(cfg);
    parameter_shapes(cfg);
    captures(cfg);
    function_traits(cfg);
    fn_items(cfg);
    Ok(())
}

fn shrinking_forms(cfg: &Config) {
    output::section("shrinking forms", cfg.quiet);

    // A named type implementing the seam...
    let formal = FormalIntroduction;
    say!(formal.introduce("Liz", "queen"));

    // ...and the closure forms, each shorter than the last: annotated,
    // inferred with a body block, then the bare expression.
    let annotated = |name: &str, job: &str| -> String { intro_line(name, job) };
    say!(annotated("Florence", "machine"));

    let inferred = |name, job| {
        intro_line(name, job)
    };
    say!(inferred("Francis", "pope"));

    let terse = |name, job| intro_line(name, job);
    say!(terse("Justin", "chanteuse"));
}

fn parameter_shapes(cfg: &Config) {
    output::section("parameter shapes", cfg.quiet);

    // One parameter keeps its pipes.
    let present = |name: &str| join_fragments(&[&INTRO_NAME, &name]);
    say!(present("Kim"));

    // Zero parameters: empty pipes.
    let anonymous = || String::from("I do not know who I am");
    say!(anonymous());
}

fn captures(cfg: &Config) {
    output::section("captures", cfg.quiet);

    let motto: String = String::from("borrow first, move when asked");

    // A borrowing capture leaves the original usable afterwards.
    let borrowing = || format!("borrowed: {motto}");
    say!(borrowing());
    say!("still mine:", motto.as_str());

    // `move` hands the value over; the closure owns it now.
    let owned: String = motto.clone();
    let owning = move || format!("owned: {owned}");
    say!(owning());

    // Mutating captures are allowed outright; the closure just has to be
    // `mut`, and the borrow rules still hold while it lives.
    let mut count: u32 = 0;
    let mut tally = || {
        count += 1;
        count
    };
    tally();
    tally();
    let total: u32 = tally();
    say!("tally ticked", total, "times");
}

/// An `Fn` capture is shared: callable as often as we like.
fn call_fn(f: impl Fn() -> String) -> String {
    f()
}

/// An `FnMut` may change what it captured; we call it twice to show it.
fn call_fn_mut(mut f: impl FnMut() -> u32) -> u32 {
    f();
    f()
}

/// An `FnOnce` may consume its capture, so one call is all there is.
fn call_fn_once(f: impl FnOnce() -> String) -> String {
    f()
}

fn function_traits(cfg: &Config) {
    output::section("the function traits", cfg.quiet);

    let greeting: String = String::from("hello");
    say!("Fn:", call_fn(|| greeting.clone()));

    let mut calls: u32 = 0;
    say!("FnMut:", call_fn_mut(|| {
        calls += 1;
        calls
    }));

    let farewell: String = String::from("goodbye");
    say!("FnOnce:", call_fn_once(move || farewell));
}

/// A plain function item: no captures, usable wherever the signature fits.
fn shout(name: &str) -> String {
    name.to_uppercase()
}

fn introduce_with(f: impl Fn(&str) -> String) -> String {
    f("morgan")
}

fn fn_items(cfg: &Config) {
    output::section("fn items as closures", cfg.quiet);

    say!("named fn:", introduce_with(shout));
    say!("closure:", introduce_with(|name| name.to_uppercase()));
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
    fn named_type_and_closure_build_the_same_line() {
        let by_type: String = FormalIntroduction.introduce("Liz", "queen");
        let by_closure = |name, job| intro_line(name, job);
        assert_eq!(by_type, by_closure("Liz", "queen"));
        assert_eq!(by_type, "Hi, I am Liz and I am a queen");
    }

    #[test]
    fn fn_mut_seam_lets_the_capture_tick() {
        let mut calls: u32 = 0;
        let result: u32 = call_fn_mut(|| {
            calls += 1;
            calls
        });
        assert_eq!(result, 2);
        assert_eq!(calls, 2);
    }

    #[test]
    fn fn_once_consumes_its_capture() {
        let token: String = String::from("once");
        assert_eq!(call_fn_once(move || token), "once");
    }

    #[test]
    fn fn_item_and_closure_are_interchangeable() {
        assert_eq!(introduce_with(shout), introduce_with(|name| name.to_uppercase()));
        assert_eq!(introduce_with(shout), "MORGAN");
    }
}
