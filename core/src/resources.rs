//! Scope-bound resources and the error machinery around them.
//!
//! Covers manual release next to `Drop`-driven release, dispatching on
//! `io::ErrorKind` instead of treating every failure alike, whole-file
//! I/O in one call, `match` over strings, one error union where separate
//! per-type handlers used to live, and the numeric literal niceties.
//!
//! This family narrates through the logger rather than stdout, so the
//! commentary obeys `RUSTOUR_LOG` like any other diagnostics.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;
use tracing::{error, info, warn};

use rustour_common::config::Config;
use rustour_common::output;

pub const MILLION: i32 = 1000000; // the eye has to count the zeroes
pub const BILLION: i32 = 1_000_000_000; // the separator counts them for us
pub const TRILLION: i64 = 1_000_000_000_000;

const KNOWN_WORDS: [&str; 7] = ["abc", "def", "foo", "bar", "janfu", "ijk", "xyz"];

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    scoped_cleanup(cfg)?;
    cleanup_on_error(cfg)?;
    whole_file_io(cfg)?;
    strings_in_match(cfg);
    error_unions(cfg)?;
    numeric_literals(cfg);
    Ok(())
}

/// A resource that announces its own release and records it in a journal,
/// so release order is observable.
struct Probe<'a> {
    label: &'static str,
    journal: &'a RefCell<Vec<&'static str>>,
}

impl<'a> Probe<'a> {
    fn acquire(label: &'static str, journal: &'a RefCell<Vec<&'static str>>) -> Self {
        info!("acquired {label}");
        Self { label, journal }
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.journal.borrow_mut().push(self.label);
        info!("released {}", self.label);
    }
}

fn scoped_cleanup(cfg: &Config) -> anyhow::Result<()> {
    output::log_section("scoped cleanup", cfg.quiet);

    let journal: RefCell<Vec<&'static str>> = RefCell::new(Vec::new());

    // The manual way: acquire, use, and remember to release on every
    // path out of the scope.
    let manual = Probe::acquire("manual-file", &journal);
    info!("...using the resource...");
    drop(manual);

    // The scope-driven way: release happens when the binding dies,
    // in reverse declaration order, with nothing left to forget.
    release_in_reverse(&journal);

    // An early `?` exit is still a scope exit.
    if let Err(e) = read_first_line(Path::new("definitely-not-here.txt"), &journal) {
        error!("resource problem: {e:#}");
    }

    info!("release order so far: {:?}", journal.borrow());
    Ok(())
}

/// Three resources in one scope; their guards go out backwards.
fn release_in_reverse(journal: &RefCell<Vec<&'static str>>) {
    let _reader = Probe::acquire("reader", journal);
    let _writer = Probe::acquire("writer", journal);
    let _socket = Probe::acquire("socket", journal);
}

/// A guard held across a fallible call releases even when `?` bails.
fn read_first_line(path: &Path, journal: &RefCell<Vec<&'static str>>) -> anyhow::Result<String> {
    let _guard = Probe::acquire("line-guard", journal);
    let file: File = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line)?;
    Ok(first_line.trim_end().to_string())
}

fn cleanup_on_error(cfg: &Config) -> anyhow::Result<()> {
    output::log_section("cleanup on error", cfg.quiet);

    let dir = tempfile::tempdir()?;
    let present: PathBuf = dir.path().join("hello.txt");
    fs::write(&present, "hello resource\nsecond line\n")?;
    let missing: PathBuf = dir.path().join("not-there.txt");

    // The blunt way: every failure reads the same.
    for path in [&present, &missing] {
        match first_line(path) {
            Ok(line) => info!("read {:?}: {line}", path.file_name()),
            Err(_) => error!("resource problem"),
        }
    }

    // The discriminating way: a missing file is routine, anything else
    // deserves the loud treatment.
    for path in [&present, &missing] {
        match first_line(path) {
            Ok(line) => info!("read {:?}: {line}", path.file_name()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no {:?} here, skipping it", path.file_name());
            }
            Err(e) => error!("failed reading {:?}: {e}", path.file_name()),
        }
    }
    Ok(())
}

/// First line of a file through a buffered reader.
fn first_line(path: &Path) -> io::Result<String> {
    let file: File = File::open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

fn whole_file_io(cfg: &Config) -> anyhow::Result<()> {
    output::log_section("whole-file I/O", cfg.quiet);

    let dir = tempfile::tempdir()?;
    let path: PathBuf = dir.path().join("notes.txt");

    // One call writes the whole thing, one call reads it back. The
    // buffered-reader ceremony above is for when streaming matters.
    fs::write(&path, "line 1\nline 2\nline 3\n")?;
    let text: String = fs::read_to_string(&path)?;
    info!("wrote and read back {} lines", text.lines().count());
    Ok(())
}

fn strings_in_match(cfg: &Config) {
    output::log_section("strings in match", cfg.quiet);

    for word in KNOWN_WORDS {
        info!(
            "{word}: if-ladder -> {}, match -> {}",
            dispatch_chained(word),
            dispatch_match(word)
        );
    }
}

/// The chained-comparison way: every arm spells the equality out again.
fn dispatch_chained(word: &str) -> u32 {
    if word == "abc" {
        1
    } else if word == "def" {
        2
    } else if word == "foo" || word == "bar" || word == "janfu" {
        3
    } else if word == "ijk" {
        4
    } else {
        0
    }
}

/// The `match` way: alternatives share an arm, and there is no
/// fallthrough to forget a `break` over.
fn dispatch_match(word: &str) -> u32 {
    match word {
        "abc" => 1,
        "def" => 2,
        "foo" | "bar" | "janfu" => 3,
        "ijk" => 4,
        _ => 0,
    }
}

/// The one failure type both steps of [`read_count`] funnel into. The
/// `#[from]` conversions are what feed its `?`s.
#[derive(Debug, Error)]
pub enum ReadCountError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("not a number: {0}")]
    Parse(#[from] std::num::ParseIntError),
}

fn error_unions(cfg: &Config) -> anyhow::Result<()> {
    output::log_section("error unions", cfg.quiet);

    let dir = tempfile::tempdir()?;
    let good: PathBuf = dir.path().join("count.txt");
    fs::write(&good, "1337\n")?;
    let garbled: PathBuf = dir.path().join("garbled.txt");
    fs::write(&garbled, "over nine thousand\n")?;
    let missing: PathBuf = dir.path().join("gone.txt");

    // The per-type way: the same recovery, written once per failure type.
    if let Err(e) = fs::read_to_string(&missing) {
        warn!("io recovery: {e}");
    }
    if let Err(e) = "over nine thousand".parse::<i64>() {
        warn!("parse recovery: {e}");
    }

    // The union way: both failure types arrive in one arm.
    for path in [&good, &garbled, &missing] {
        match read_count(path) {
            Ok(count) => info!("{:?} holds {count}", path.file_name()),
            Err(e @ (ReadCountError::Io(_) | ReadCountError::Parse(_))) => {
                warn!("skipping {:?}: {e}", path.file_name());
            }
        }
    }
    Ok(())
}

/// Read a file and parse its content as a number: two failure types, one
/// signature, one `?` pipeline.
fn read_count(path: &Path) -> Result<i64, ReadCountError> {
    let text: String = fs::read_to_string(path)?;
    let count: i64 = text.trim().parse()?;
    Ok(count)
}

fn numeric_literals(cfg: &Config) {
    output::log_section("numeric literals", cfg.quiet);

    info!("a million : {MILLION}");
    info!("a billion : {BILLION}");
    info!("a trillion: {TRILLION}");

    // Binary and hex literals, grouped where the eye wants them grouped.
    let mask: u32 = 0b0001_0011;
    let page: u32 = 0b0011_0100_0101_0110;
    let limit: u32 = 0x00FF_FFFF;
    info!("mask={mask:#b} page={page:#b} limit={limit:#x}");

    // Element types ride along with the collection once the context pins
    // them down; the spelled-out form buys nothing.
    let spelled_out: Vec<f32> = Vec::<f32>::new();
    let inferred: Vec<f32> = Vec::new();
    let collected: Vec<u32> = (1..=3).collect();
    info!(
        "spelled out and inferred agree: {}; collect counted to {}",
        spelled_out.len() == inferred.len(),
        collected.len()
    );
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
    fn probes_release_in_reverse_declaration_order() {
        let journal: RefCell<Vec<&'static str>> = RefCell::new(Vec::new());
        release_in_reverse(&journal);
        assert_eq!(*journal.borrow(), vec!["socket", "writer", "reader"]);
    }

    #[test]
    fn an_early_return_still_releases_the_guard() {
        let journal: RefCell<Vec<&'static str>> = RefCell::new(Vec::new());
        let result = read_first_line(Path::new("no/such/file.txt"), &journal);
        assert!(result.is_err());
        assert_eq!(*journal.borrow(), vec!["line-guard"]);
    }

    #[test]
    fn first_line_reads_only_the_first() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("notes.txt");
        fs::write(&path, "line 1\nline 2\nline 3\n")?;
        assert_eq!(first_line(&path)?, "line 1");
        Ok(())
    }

    #[test]
    fn chained_and_match_dispatch_agree() {
        for word in KNOWN_WORDS {
            assert_eq!(dispatch_chained(word), dispatch_match(word), "diverged on {word}");
        }
        assert_eq!(dispatch_match("unknown"), 0);
    }

    // --- Error Cases ---

    #[test]
    fn read_count_distinguishes_its_failure_modes() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let good = dir.path().join("good.txt");
        fs::write(&good, "42")?;
        assert_eq!(read_count(&good)?, 42);

        let garbled = dir.path().join("garbled.txt");
        fs::write(&garbled, "forty-two")?;
        assert!(matches!(read_count(&garbled), Err(ReadCountError::Parse(_))));

        let missing = dir.path().join("gone.txt");
        assert!(matches!(read_count(&missing), Err(ReadCountError::Io(_))));
        Ok(())
    }

    #[test]
    fn missing_files_surface_as_not_found() {
        let err = first_line(Path::new("no/such/file.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn literal_groupings_spell_the_same_numbers() {
        assert_eq!(MILLION, 1_000_000);
        assert_eq!(BILLION / MILLION, 1000);
        assert_eq!(TRILLION / i64::from(BILLION), 1000);
    }
}
