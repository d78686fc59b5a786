//! A look at our own process.
//!
//! The pid, the scrape-a-shell-tool way of finding a parent next to the
//! typed process-table lookup, and short-lived children: spawned,
//! enumerated by parent pid, then killed and reaped.

use std::process::{Child, Command};

use anyhow::Context;
use sysinfo::{Pid, PidExt, ProcessExt, System, SystemExt};

use rustour_common::config::Config;
use rustour_common::output;
use rustour_common::{say, warn};

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    current_process(cfg)?;
    children(cfg)?;
    Ok(())
}

fn current_process(cfg: &Config) -> anyhow::Result<()> {
    output::section("the current process", cfg.quiet);

    let pid: u32 = std::process::id();
    say!("process id =", pid);

    // The scrape way: spawn ps, trust its columns, parse its text.
    // Unix only, and fragile in exactly the ways the typed lookup is not.
    #[cfg(unix)]
    match parent_pid_via_ps(pid) {
        Some(ppid) => {
            say!("parent via ps scrape =", ppid);
        }
        None => warn!("ps scrape gave no parent for pid {pid}"),
    }

    // The typed way: one refresh, then fields instead of columns.
    let mut system: System = System::new();
    system.refresh_processes();
    let me = system
        .process(Pid::from_u32(pid))
        .context("our own pid is missing from the process table")?;

    say!("name =", me.name());
    if let Some(parent) = me.parent() {
        say!("parent process id =", parent.as_u32());
    }
    say!("memory =", me.memory() / 1024, "KiB");
    Ok(())
}

/// Asks `ps` for the parent pid and scrapes the answer out of stdout.
#[cfg(unix)]
fn parent_pid_via_ps(pid: u32) -> Option<u32> {
    let output = Command::new("ps")
        .args(["-o", "ppid=", "-p"])
        .arg(pid.to_string())
        .output()
        .ok()?;
    parse_ppid(&String::from_utf8_lossy(&output.stdout))
}

/// The fragile half of the scrape, kept apart so it can be pinned down.
fn parse_ppid(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn children(cfg: &Config) -> anyhow::Result<()> {
    output::section("children", cfg.quiet);

    let mut spawned: Vec<Child> = spawn_sleepers(2)?;
    if spawned.is_empty() {
        say!("no child command available on this platform");
        return Ok(());
    }

    let mut system: System = System::new();
    system.refresh_processes();

    let me: Pid = Pid::from_u32(std::process::id());
    let mut child_pids: Vec<u32> = system
        .processes()
        .values()
        .filter(|process| process.parent() == Some(me))
        .map(|process| process.pid().as_u32())
        .collect();
    child_pids.sort_unstable();

    for pid in &child_pids {
        say!("child process =", pid);
    }

    // Even a killed child wants its wait; unreaped children linger.
    for child in &mut spawned {
        let _ = child.kill();
        child.wait()?;
    }
    say!("reaped", spawned.len(), "children");
    Ok(())
}

/// Short-lived children to point the process table at.
fn spawn_sleepers(count: usize) -> anyhow::Result<Vec<Child>> {
    #[cfg(unix)]
    {
        (0..count)
            .map(|_| Command::new("sleep").arg("5").spawn().context("spawning a sleeper"))
            .collect()
    }
    #[cfg(not(unix))]
    {
        let _ = count;
        Ok(Vec::new())
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

    #[test]
    fn parse_ppid_scrapes_the_number() {
        assert_eq!(parse_ppid("  4242\n"), Some(4242));
        assert_eq!(parse_ppid("1"), Some(1));
    }

    // --- Error Cases ---

    #[test]
    fn parse_ppid_rejects_garbage() {
        assert_eq!(parse_ppid(""), None);
        assert_eq!(parse_ppid("not a pid"), None);
        assert_eq!(parse_ppid("-7"), None);
    }

    #[test]
    fn our_own_pid_is_in_the_process_table() {
        let mut system: System = System::new();
        system.refresh_processes();
        let me = system.process(Pid::from_u32(std::process::id()));
        assert!(me.is_some(), "no entry for our own pid");
    }
}
