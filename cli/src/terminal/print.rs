use colored::*;
use unicode_width::UnicodeWidthStr;

use rustour_common::config::Config;

use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;

/// Applies the global color policy before anything prints: an explicit
/// `--no-color`, or stdout not being a terminal, turns styling off
/// everywhere at once.
pub fn initialize(cfg: &Config) {
    if cfg.no_color || !console::user_attended() {
        colored::control::set_override(false);
    }
}

/// Version rule plus one of the art variants. Quiet runs, `--no-banner`
/// and redirected stdout all skip the whole thing.
pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 || !console::user_attended() {
        return;
    }

    let text_content: String = format!("⟦ RUSTOUR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    println!("{}{}{}", sep, text, sep);

    banner::print();
}

/// Headline above a demonstration.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    println!("{}", line);
}

/// Rule line between demonstrations in a full tour.
pub fn rule(q_level: u8) {
    if q_level > 0 {
        return;
    }
    println!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
}

/// Closes a full tour: a rule and a centered tally.
pub fn tour_complete(count: usize, q_level: u8) {
    let label: ColoredString = "Tour complete:".color(colors::TEXT_DEFAULT);
    let tally: ColoredString = format!("{count} demonstrations").bold().color(colors::ACCENT);
    let message: String = format!("{label} {tally}");

    if q_level > 0 {
        rustour_common::success!("{message}");
        return;
    }

    rule(q_level);
    centerln(&message);
}

fn centerln(msg: &str) {
    let width: usize = console::measure_text_width(msg);
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    println!("{}{}{}", space, msg, space);
}
