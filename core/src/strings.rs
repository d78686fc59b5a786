use rustour_common::config::Config;
use rustour_common::output::{self, say_iter};
use rustour_common::say;

const PADDED: &str = "  hi there  ";

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    trimming(cfg);
    blank_detection(cfg);
    views(cfg);
    building(cfg);
    Ok(())
}

fn trimming(cfg: &Config) {
    output::section("trimming", cfg.quiet);

    say!("original:", bracketed(PADDED));

    // The hand-rolled scan only knows ASCII spaces and tabs.
    say!("byte scan:", bracketed(trim_ascii_spaces(PADDED)));

    // The library asks every char whether it is whitespace, in the
    // Unicode sense.
    say!("trim:", bracketed(PADDED.trim()));
    say!("trim_start:", bracketed(PADDED.trim_start()));
    say!("trim_end:", bracketed(PADDED.trim_end()));

    // The difference shows on non-ASCII spaces, here U+2009 THIN SPACE.
    let thin: &str = "\u{2009}hi there\u{2009}";
    say!("byte scan on thin spaces:", bracketed(trim_ascii_spaces(thin)));
    say!("trim on thin spaces:", bracketed(thin.trim()));
}

fn bracketed(s: &str) -> String {
    format!("[{s}]")
}

/// Space-and-tab trimming the way a quick byte scan does it. Only strips
/// single-byte ASCII, so the slice bounds always sit on char boundaries.
pub fn trim_ascii_spaces(s: &str) -> &str {
    let bytes: &[u8] = s.as_bytes();
    let mut start: usize = 0;
    let mut end: usize = bytes.len();
    while start < end && (bytes[start] == b' ' || bytes[start] == b'\t') {
        start += 1;
    }
    while end > start && (bytes[end - 1] == b' ' || bytes[end - 1] == b'\t') {
        end -= 1;
    }
    &s[start..end]
}

fn blank_detection(cfg: &Config) {
    output::section("blank detection", cfg.quiet);

    for candidate in ["", "   ", "\u{2009}", " x "] {
        say!(
            bracketed(candidate),
            "is_empty:",
            candidate.is_empty(),
            "blank:",
            is_blank(candidate),
        );
    }
}

/// Empty or whitespace-only, by Unicode rules.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn views(cfg: &Config) {
    output::section("lines, chars and bytes", cfg.quiet);

    let poem: &str = "line 1\nline 2\nline 3";
    say!("lines counted:", poem.lines().count());
    say_iter("lines", poem.lines());

    // One value, two sizes: scalar values and encoded bytes.
    say!("chars in 'naïve':", "naïve".chars().count());
    say!("bytes in 'naïve':", "naïve".len());

    say!("echo:", "hi ".repeat(3).trim_end());
}

fn building(cfg: &Config) {
    output::section("building strings", cfg.quiet);

    // Accumulating by hand...
    let mut manual = String::new();
    manual.push_str("3 items");
    manual.push_str(" @ ");
    manual.push_str(&7.to_string());
    manual.push_str(" gold");
    say!("manual:", manual.as_str());

    // ...or letting the formatter place everything at once.
    let formatted: String = format!("{} items @ {} gold", 3, 7);
    say!("format!:", formatted.as_str());
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
    fn byte_scan_matches_trim_on_plain_spaces() {
        assert_eq!(trim_ascii_spaces("  hi there  "), "hi there");
        assert_eq!(trim_ascii_spaces("  hi there  "), "  hi there  ".trim());
        assert_eq!(trim_ascii_spaces("\t tabbed \t"), "tabbed");
    }

    #[test]
    fn byte_scan_misses_unicode_whitespace() {
        let thin: &str = "\u{2009}hi\u{2009}";
        assert_eq!(trim_ascii_spaces(thin), thin);
        assert_eq!(thin.trim(), "hi");
    }

    #[test]
    fn byte_scan_survives_all_space_input() {
        assert_eq!(trim_ascii_spaces("    "), "");
        assert_eq!(trim_ascii_spaces(""), "");
    }

    #[test]
    fn blank_covers_empty_and_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\u{2009}\n\t"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn char_count_and_byte_count_diverge() {
        assert_eq!("naïve".chars().count(), 5);
        assert_eq!("naïve".len(), 6);
    }
}
