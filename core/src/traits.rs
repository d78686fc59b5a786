//! Traits that carry code, not just signatures.
//!
//! Required methods next to provided ones, overrides, associated
//! functions without a receiver, a module-private helper shared by a
//! family of defaults, and the diamond: two supertraits providing the
//! same method name, resolved by naming the trait.

use chrono::Local;

use rustour_common::config::Config;
use rustour_common::output;
use rustour_common::say;

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    provided_methods(cfg);
    associated_functions(cfg);
    private_helpers(cfg);
    the_diamond(cfg);
    Ok(())
}

/// Required `name`, provided everything else.
pub trait Station {
    fn name(&self) -> String;

    /// Most implementors are happy with the stock report.
    fn report(&self) -> String {
        format!("{} is operational", self.name())
    }

    /// Provided methods can lean on the clock like any other code.
    fn stamped(&self, message: &str) -> String {
        format!("{} {}: {}", Local::now().format("%H:%M:%S"), self.name(), message)
    }
}

struct Relay;

impl Station for Relay {
    fn name(&self) -> String {
        String::from("relay-1")
    }
}

struct Beacon;

impl Station for Beacon {
    fn name(&self) -> String {
        String::from("beacon-7")
    }

    // The stock answer is wrong for a beacon.
    fn report(&self) -> String {
        format!("{} is blinking, as beacons do", self.name())
    }
}

fn provided_methods(cfg: &Config) {
    output::section("provided methods", cfg.quiet);

    say!(Relay.report());
    say!(Beacon.report());
    say!(Relay.stamped("routing"));
}

pub trait Mayday {
    /// No receiver: called on the implementing type, not on a value.
    fn help(detail: &str) -> String
    where
        Self: Sized,
    {
        format!("please help! {detail}")
    }
}

struct Dinghy;

impl Mayday for Dinghy {}

fn associated_functions(cfg: &Config) {
    output::section("associated functions", cfg.quiet);

    say!(<Dinghy as Mayday>::help("taking on water"));
    say!(Dinghy::help("still taking on water"));
}

#[derive(Debug, Clone, Copy)]
enum SortKey {
    Name,
    Address,
    Age,
}

#[derive(Debug, Clone)]
pub struct Crew {
    pub name: &'static str,
    pub address: &'static str,
    pub age: u32,
}

/// Sorting surface with one required data source.
///
/// Every provided method funnels into [`sort_crew`], which lives in this
/// module rather than in the trait: implementors inherit the defaults but
/// cannot reach the machinery underneath them.
pub trait Roster {
    fn crew(&self) -> Vec<Crew>;

    fn preferred_sort(&self) -> Vec<String> {
        self.sort_by_name()
    }

    fn sort_by_name(&self) -> Vec<String> {
        sort_crew(self.crew(), SortKey::Name, true)
    }

    fn sort_by_address(&self) -> Vec<String> {
        sort_crew(self.crew(), SortKey::Address, true)
    }

    fn sort_by_age(&self, ascending: bool) -> Vec<String> {
        sort_crew(self.crew(), SortKey::Age, ascending)
    }
}

fn sort_crew(mut crew: Vec<Crew>, key: SortKey, ascending: bool) -> Vec<String> {
    crew.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.cmp(b.name),
            SortKey::Address => a.address.cmp(b.address),
            SortKey::Age => a.age.cmp(&b.age),
        };
        if ascending { ordering } else { ordering.reverse() }
    });
    crew.into_iter().map(|member| member.name.to_string()).collect()
}

struct Watch;

impl Roster for Watch {
    fn crew(&self) -> Vec<Crew> {
        vec![
            Crew { name: "imogen", address: "dockside 4", age: 44 },
            Crew { name: "ahmed", address: "hillcrest 9", age: 31 },
            Crew { name: "suki", address: "canal row 1", age: 58 },
        ]
    }
}

/// Overrides the preference; the shared machinery stays out of reach.
struct NightWatch;

impl Roster for NightWatch {
    fn crew(&self) -> Vec<Crew> {
        Watch.crew()
    }

    fn preferred_sort(&self) -> Vec<String> {
        self.sort_by_age(false)
    }
}

fn private_helpers(cfg: &Config) {
    output::section("private helpers behind defaults", cfg.quiet);

    say!("by name:", Watch.preferred_sort().join(", "));
    say!("by address:", Watch.sort_by_address().join(", "));
    say!("by age, oldest first:", Watch.sort_by_age(false).join(", "));
    say!("night watch preference:", NightWatch.preferred_sort().join(", "));
}

trait PortSide {
    fn call_sign(&self) -> String {
        String::from("port")
    }
}

trait Starboard {
    fn call_sign(&self) -> String {
        String::from("starboard")
    }
}

struct Ferry;

impl PortSide for Ferry {}
impl Starboard for Ferry {}

fn the_diamond(cfg: &Config) {
    output::section("the diamond", cfg.quiet);

    let ferry = Ferry;
    // `ferry.call_sign()` would be ambiguous and does not compile;
    // qualified syntax names the trait we mean.
    say!("as port side:", <Ferry as PortSide>::call_sign(&ferry));
    say!("as starboard:", Starboard::call_sign(&ferry));
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
    fn stock_report_and_override_differ() {
        assert_eq!(Relay.report(), "relay-1 is operational");
        assert_eq!(Beacon.report(), "beacon-7 is blinking, as beacons do");
    }

    #[test]
    fn stamped_lines_carry_the_station_name() {
        assert!(Relay.stamped("routing").contains("relay-1: routing"));
    }

    #[test]
    fn every_sort_goes_through_the_same_helper() {
        assert_eq!(Watch.preferred_sort(), vec!["ahmed", "imogen", "suki"]);
        assert_eq!(Watch.sort_by_age(true), vec!["ahmed", "imogen", "suki"]);
        assert_eq!(Watch.sort_by_age(false), vec!["suki", "imogen", "ahmed"]);
        assert_eq!(Watch.sort_by_address(), vec!["suki", "imogen", "ahmed"]);
    }

    #[test]
    fn night_watch_prefers_descending_age() {
        assert_eq!(NightWatch.preferred_sort(), Watch.sort_by_age(false));
    }

    #[test]
    fn the_diamond_resolves_by_qualified_syntax() {
        let ferry = Ferry;
        assert_eq!(<Ferry as PortSide>::call_sign(&ferry), "port");
        assert_eq!(<Ferry as Starboard>::call_sign(&ferry), "starboard");
    }

    #[test]
    fn associated_function_needs_no_value() {
        assert_eq!(Dinghy::help("capsized"), "please help! capsized");
    }
}
