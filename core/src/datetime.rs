//! Dates and times on the typed calendar.
//!
//! Opens with the raw epoch count the old way handed around, then works
//! through dates, times, combined stamps, exact and calendar spans,
//! calendar arithmetic with a few adjusters, and formatting and parsing
//! with strftime patterns. Invalid calendar data never becomes a value
//! here; the constructors hand back `None` and the demonstrations make a
//! point of showing it.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Local, Months, NaiveDate, NaiveDateTime, NaiveTime,
    TimeDelta, Timelike, Utc, Weekday,
};

use rustour_common::config::Config;
use rustour_common::output;
use rustour_common::random;
use rustour_common::{say, sayerr};

// Fixed offsets stand in for zone rules; real zone databases are a crate
// of their own.
const SYDNEY: i32 = 10 * 3600;
const TOKYO: i32 = 9 * 3600;
const NEW_YORK: i32 = -5 * 3600;

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    introduction(cfg);
    dates(cfg);
    times(cfg);
    datetimes(cfg);
    spans(cfg);
    calendar_math(cfg);
    formatting(cfg);
    parsing(cfg);
    Ok(())
}

fn offset(seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(seconds).expect("offset is less than a day")
}

fn introduction(cfg: &Config) {
    output::section("introduction", cfg.quiet);

    // The untyped way: one big second count and hand arithmetic.
    let seconds: u64 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|span| span.as_secs())
        .unwrap_or(0);
    say!("seconds since the epoch =", seconds);
    say!("which is roughly year =", 1970 + seconds / 31_557_600);

    // The typed way: the value knows what it is and where it is.
    say!("Utc::now() =", Utc::now());
    say!("Local::now() =", Local::now());
}

fn dates(cfg: &Config) {
    output::section("dates", cfg.quiet);

    let today: NaiveDate = Local::now().date_naive();
    say!("today =", today);

    match NaiveDate::from_ymd_opt(1776, 7, 4) {
        Some(independence) => say!("independence day =", independence),
        None => sayerr!("the calendar refused 1776-07-04"),
    };

    // Bad data never becomes a date.
    if NaiveDate::from_ymd_opt(2000, 2, 30).is_none() {
        sayerr!("no bad dates here: 2000-02-30 was refused");
    }

    say!("day zero of the epoch =", DateTime::<Utc>::UNIX_EPOCH.date_naive());

    if let Some(hundredth) = NaiveDate::from_yo_opt(today.year(), 100) {
        say!("day 100 of", today.year(), "=", hundredth);
    }

    say!(
        "today is",
        today.weekday(),
        "- day",
        today.ordinal(),
        "of the year, day",
        today.day(),
        "of month",
        today.month(),
    );

    // "Today" depends on where you stand.
    say!("today in Sydney =", Utc::now().with_timezone(&offset(SYDNEY)).date_naive());
    say!("today in Tokyo =", Utc::now().with_timezone(&offset(TOKYO)).date_naive());
    say!("today in New York =", Utc::now().with_timezone(&offset(NEW_YORK)).date_naive());
}

fn times(cfg: &Config) {
    output::section("times", cfg.quiet);

    say!("time now =", Local::now().time());

    if let Some(precise) = NaiveTime::from_hms_nano_opt(11, 59, 59, 987_654_321) {
        say!("down to the nanosecond =", precise);
    }
    if let Some(noon) = NaiveTime::from_hms_opt(12, 0, 0) {
        say!("noon =", noon);
    }

    if NaiveTime::from_hms_opt(24, 60, 0).is_none() {
        sayerr!("no bad times here: 24:60:00 was refused");
    }

    if let Some(by_count) = NaiveTime::from_num_seconds_from_midnight_opt(50_000, 0) {
        say!("second 50000 of the day =", by_count);
    }

    say!("clock in Sydney =", Utc::now().with_timezone(&offset(SYDNEY)).time());
    say!("clock in Tokyo =", Utc::now().with_timezone(&offset(TOKYO)).time());
}

fn datetimes(cfg: &Config) {
    output::section("datetimes", cfg.quiet);

    let now: NaiveDateTime = Local::now().naive_local();
    say!("now =", now);

    let composed: Option<NaiveDateTime> =
        NaiveDate::from_ymd_opt(2017, 12, 25).and_then(|date| date.and_hms_opt(11, 59, 30));
    if let Some(composed) = composed {
        say!("composed from parts =", composed);
    }

    if NaiveDate::from_ymd_opt(2017, 2, 29).is_none() {
        sayerr!("2017 had no February 29th");
    }

    if let Some(far_out) = DateTime::from_timestamp(1_000_000_000_000, 0) {
        say!("epoch second 1000000000000 =", far_out);
    }

    say!(
        "now is minute",
        now.minute(),
        "past hour",
        now.hour(),
        "- date part",
        now.date(),
        "and time part",
        now.time(),
    );
}

fn spans(cfg: &Config) {
    output::section("spans", cfg.quiet);

    // Exact spans count real seconds.
    let week: TimeDelta = TimeDelta::days(7);
    say!("one week =", week);
    say!("two weeks =", week + week);
    say!("a day and a half =", week - TimeDelta::days(6) + TimeDelta::hours(12));
    say!("five and a half minutes =", TimeDelta::minutes(5) + TimeDelta::seconds(30));

    // Instant measures our own elapsed time; nothing calendar about it.
    let stopwatch: Instant = Instant::now();
    let warmup: i64 = (0..10_000i64).sum();
    say!("summing to", warmup, "took", format!("{:?}", stopwatch.elapsed()));

    // Calendar spans shift fields instead of counting seconds, so
    // "+ 1 month" lands where the calendar says it should.
    let today: NaiveDate = Local::now().date_naive();
    let remaining: TimeDelta = last_day_of_year(today).signed_duration_since(today);
    say!("days left this year =", remaining.num_days());

    // A random span, walked backwards.
    let months_back: u32 = random::random_int(2, 5) as u32;
    let days_back: u64 = random::random_int(7, 28) as u64;
    let shifted: Option<NaiveDate> = today
        .checked_sub_months(Months::new(months_back))
        .and_then(|date| date.checked_sub_days(Days::new(days_back)));
    if let Some(shifted) = shifted {
        say!(months_back, "months and", days_back, "days ago =", shifted);
    }
}

fn calendar_math(cfg: &Config) {
    output::section("calendar math", cfg.quiet);

    let today: NaiveDate = Local::now().date_naive();
    say!("year", today.year(), "is a leap year:", today.leap_year());

    // Dates order like any other value.
    let milestones: Option<(NaiveDate, NaiveDate)> = NaiveDate::from_ymd_opt(2015, 5, 15)
        .zip(NaiveDate::from_ymd_opt(2021, 10, 21));
    if let Some((rust_1_0, edition_2021)) = milestones {
        say!("Rust 1.0 shipped before the 2021 edition:", rust_1_0 < edition_2021);
        say!("today is after both:", today > edition_2021);
    }

    // Shifts in both directions.
    say!("21 days out =", today + TimeDelta::days(21));
    say!("13 weeks out =", today + TimeDelta::weeks(13));
    say!("21 days back =", today - TimeDelta::days(21));
    if let Some(ahead) = today.checked_add_months(Months::new(18)) {
        say!("18 months out =", ahead);
    }

    // The adjusters.
    say!("first day of this month =", first_day_of_month(today));
    say!("last day of this year =", last_day_of_year(today));
    say!("next Friday =", next_weekday(today, Weekday::Fri));
    say!("previous or same Friday =", previous_or_same_weekday(today, Weekday::Fri));
}

/// First calendar day of `date`'s month. Day one exists in every month,
/// so the fallback never fires.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// December 31st of `date`'s year.
pub fn last_day_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// The next `weekday` strictly after `date`: landing on one already
/// means jumping a full week.
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let from: u32 = date.weekday().num_days_from_monday();
    let to: u32 = weekday.num_days_from_monday();
    let ahead: u32 = match (to + 7 - from) % 7 {
        0 => 7,
        days => days,
    };
    date + TimeDelta::days(i64::from(ahead))
}

/// The closest `weekday` at or before `date`; `date` itself qualifies.
pub fn previous_or_same_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let from: u32 = date.weekday().num_days_from_monday();
    let to: u32 = weekday.num_days_from_monday();
    date - TimeDelta::days(i64::from((from + 7 - to) % 7))
}

fn formatting(cfg: &Config) {
    output::section("formatting", cfg.quiet);

    let now: DateTime<Local> = Local::now();

    say!("default Display =", now);
    say!("compact clock =", now.format("%H,%M,%S").to_string());
    say!("spelled-out day =", now.format("%-d / %b / %Y").to_string());
    say!("basic date =", now.format("%Y%m%d").to_string());
    say!("RFC 3339 =", now.to_rfc3339());
}

fn parsing(cfg: &Config) {
    output::section("parsing", cfg.quiet);

    match NaiveTime::parse_from_str("11/59/30", "%H/%M/%S") {
        Ok(time) => say!("parsed time =", time),
        Err(e) => sayerr!("time refused:", e.to_string()),
    };

    // The leap day parses because 2000 really had one.
    match NaiveDate::parse_from_str("29:Feb:2000", "%d:%b:%Y") {
        Ok(date) => say!("parsed date =", date),
        Err(e) => sayerr!("date refused:", e.to_string()),
    };

    match NaiveDateTime::parse_from_str("29:Feb:2000-11/59/30", "%d:%b:%Y-%H/%M/%S") {
        Ok(stamp) => say!("parsed datetime =", stamp),
        Err(e) => sayerr!("datetime refused:", e.to_string()),
    };

    // A bad one on purpose: report and move on, no panic.
    if let Err(e) = NaiveDate::parse_from_str("30:Feb:2001", "%d:%b:%Y") {
        sayerr!("as expected, 30:Feb:2001 was refused:", e.to_string());
    }
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

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("test dates are valid")
    }

    #[test]
    fn adjusters_land_on_known_dates() {
        let wednesday: NaiveDate = ymd(2024, 1, 3);
        assert_eq!(wednesday.weekday(), Weekday::Wed);

        assert_eq!(first_day_of_month(wednesday), ymd(2024, 1, 1));
        assert_eq!(last_day_of_year(wednesday), ymd(2024, 12, 31));
        assert_eq!(next_weekday(wednesday, Weekday::Fri), ymd(2024, 1, 5));
        assert_eq!(previous_or_same_weekday(wednesday, Weekday::Mon), ymd(2024, 1, 1));
    }

    #[test]
    fn previous_or_same_keeps_a_matching_date() {
        let friday: NaiveDate = ymd(2024, 1, 5);
        assert_eq!(previous_or_same_weekday(friday, Weekday::Fri), friday);
    }

    #[test]
    fn next_weekday_jumps_a_full_week_when_already_there() {
        let friday: NaiveDate = ymd(2024, 1, 5);
        assert_eq!(next_weekday(friday, Weekday::Fri), ymd(2024, 1, 12));
    }

    #[test]
    fn next_weekday_crosses_month_and_year_ends() {
        assert_eq!(next_weekday(ymd(2024, 12, 31), Weekday::Wed), ymd(2025, 1, 1));
    }

    #[test]
    fn invalid_calendar_data_is_refused() {
        assert!(NaiveDate::from_ymd_opt(2000, 2, 30).is_none());
        assert!(NaiveTime::from_hms_opt(24, 60, 0).is_none());
        assert!(NaiveDate::from_ymd_opt(2000, 2, 29).is_some());
        assert!(NaiveDate::from_ymd_opt(2017, 2, 29).is_none());
    }

    #[test]
    fn parse_then_format_round_trips() {
        let date: NaiveDate =
            NaiveDate::parse_from_str("29:Feb:2000", "%d:%b:%Y").expect("leap day parses");
        assert_eq!(date.format("%d:%b:%Y").to_string(), "29:Feb:2000");

        let time: NaiveTime =
            NaiveTime::parse_from_str("11/59/30", "%H/%M/%S").expect("time parses");
        assert_eq!(time.format("%H/%M/%S").to_string(), "11/59/30");
    }

    #[test]
    fn exact_and_calendar_month_hops_disagree() {
        let jan_31: NaiveDate = ymd(2021, 1, 31);
        let by_month: NaiveDate =
            jan_31.checked_add_months(Months::new(1)).expect("mid-range add");
        let by_days: NaiveDate = jan_31 + TimeDelta::days(31);
        assert_eq!(by_month, ymd(2021, 2, 28)); // clamped to the month end
        assert_eq!(by_days, ymd(2021, 3, 3));
        assert_ne!(by_month, by_days);
    }

    #[test]
    fn seconds_from_midnight_reconstruct_the_clock() {
        let by_count: NaiveTime =
            NaiveTime::from_num_seconds_from_midnight_opt(50_000, 0).expect("fits in a day");
        assert_eq!((by_count.hour(), by_count.minute(), by_count.second()), (13, 53, 20));
    }
}
