//! Console output in two layers.
//!
//! The [`Fragment`] trait plus the [`say!`]/[`sayerr!`] macros carry the
//! demonstration lines: heterogeneous parts joined by single spaces, with
//! one rule throughout: a part that renders to `None` is skipped entirely
//! and leaves no doubled delimiter behind. The status macros below carry
//! the CLI chrome with the usual symbol prefixes.

use std::fmt::Display;

use colored::Colorize;

/// One printable piece of a [`say!`] line.
///
/// `render` returning `None` means "leave me out": the part contributes
/// neither text nor a delimiter to the joined line.
pub trait Fragment {
    fn render(&self) -> Option<String>;
}

impl<T: Fragment + ?Sized> Fragment for &T {
    fn render(&self) -> Option<String> {
        (**self).render()
    }
}

impl<T: Fragment> Fragment for Option<T> {
    fn render(&self) -> Option<String> {
        self.as_ref().and_then(Fragment::render)
    }
}

// One impl per concrete type rather than a blanket over `Display`; the
// blanket would collide with the `Option<T>` impl above.
macro_rules! display_fragments {
    ($($type:ty),+ $(,)?) => {
        $(
            impl Fragment for $type {
                fn render(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )+
    };
}

display_fragments!(
    str,
    String,
    char,
    bool,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::Local>,
    chrono::DateTime<chrono::FixedOffset>,
    chrono::TimeDelta,
    chrono::Weekday,
);

/// Joins the rendered parts with single spaces. `None` parts vanish.
pub fn join_fragments(parts: &[&dyn Fragment]) -> String {
    let mut line = String::new();
    for part in parts {
        let Some(text) = part.render() else {
            continue;
        };
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&text);
    }
    line
}

/// Joins its arguments with single spaces, prints the line to stdout and
/// hands it back. `say!()` prints a blank line and returns `""`.
#[macro_export]
macro_rules! say {
    () => {{
        println!();
        String::new()
    }};
    ($($part:expr),+ $(,)?) => {{
        let line: String =
            $crate::output::join_fragments(&[$(&$part as &dyn $crate::output::Fragment),+]);
        println!("{line}");
        line
    }};
}

/// [`say!`], but on stderr.
#[macro_export]
macro_rules! sayerr {
    () => {{
        eprintln!();
        String::new()
    }};
    ($($part:expr),+ $(,)?) => {{
        let line: String =
            $crate::output::join_fragments(&[$(&$part as &dyn $crate::output::Fragment),+]);
        eprintln!("{line}");
        line
    }};
}

/// Section heading: a blank line, the title, and a dash rule of the same
/// width. Gone entirely at `quiet >= 2`.
pub fn section(title: &str, quiet: u8) {
    if quiet >= 2 {
        return;
    }
    println!();
    println!("{title}");
    println!("{}", "-".repeat(title.chars().count()));
}

/// The logger-narrated twin of [`section`], for demonstrations that talk
/// through `tracing` instead of stdout.
pub fn log_section(title: &str, quiet: u8) {
    if quiet >= 2 {
        return;
    }
    tracing::info!("{title}");
    tracing::info!("{}", "-".repeat(title.chars().count()));
}

/// Renders a whole iterator as `label = [a, b, c]`, prints the line and
/// hands it back.
pub fn say_iter<I>(label: &str, values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let rendered: Vec<String> = values.into_iter().map(|value| value.to_string()).collect();
    let line: String = format!("{} = [{}]", label, rendered.join(", "));
    println!("{line}");
    line
}

/// Symbol class for the status macros.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    Info,
    Success,
    Warn,
}

pub fn status(kind: Status, message: &str) {
    let prefix = match kind {
        Status::Info => "[>]".cyan(),
        Status::Success => "[+]".green().bold(),
        Status::Warn => "[!]".yellow().bold(),
    };
    println!("{prefix} {message}");
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::output::status($crate::output::Status::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::output::status($crate::output::Status::Success, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::output::status($crate::output::Status::Warn, &format!($($arg)*))
    };
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
    use crate::{say, sayerr};
    use chrono::NaiveDate;

    #[test]
    fn join_puts_single_spaces_between_parts() {
        let line: String = join_fragments(&[&"three", &"spaced", &"words"]);
        assert_eq!(line, "three spaced words");
    }

    #[test]
    fn join_skips_none_without_doubling_the_delimiter() {
        let line: String = join_fragments(&[&"x", &None::<i32>, &"y"]);
        assert_eq!(line, "x y");
    }

    #[test]
    fn join_with_no_renderable_parts_is_empty() {
        assert_eq!(join_fragments(&[]), "");
        assert_eq!(join_fragments(&[&None::<i32>, &None::<&str>]), "");
    }

    #[test]
    fn a_leading_none_leaves_no_leading_space() {
        assert_eq!(join_fragments(&[&None::<i32>, &"x"]), "x");
    }

    #[test]
    fn say_returns_what_it_printed() {
        assert_eq!(say!("x", None::<i32>, "y"), "x y");
        assert_eq!(say!(), "");
        assert_eq!(sayerr!("to", "stderr"), "to stderr");
    }

    #[test]
    fn fragments_cover_numbers_and_calendar_types() {
        let date: Option<NaiveDate> = NaiveDate::from_ymd_opt(2015, 5, 15);
        assert_eq!(join_fragments(&[&"shipped", &date]), "shipped 2015-05-15");
        assert_eq!(join_fragments(&[&-7i32, &2.5f64, &true]), "-7 2.5 true");
    }

    #[test]
    fn say_iter_brackets_the_values() {
        assert_eq!(say_iter("primes", [2, 3, 5]), "primes = [2, 3, 5]");
        assert_eq!(say_iter("none", Vec::<i32>::new()), "none = []");
    }
}
