use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rustour")]
#[command(about = "A guided tour of everyday Rust idioms.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Drop the chrome; twice to drop section headings too
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Seed the sample data for a reproducible run
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scope-bound cleanup, error unions and literal niceties
    #[command(alias = "r")]
    Resources,
    /// Closures, captures and the function traits
    #[command(alias = "c")]
    Closures,
    /// Iterator pipelines from builders to consumers
    #[command(alias = "i")]
    Iterators,
    /// External iteration against internal
    #[command(alias = "l")]
    Loops,
    /// Dates, times and calendar arithmetic
    #[command(alias = "d")]
    Datetime,
    /// Traits with provided code
    #[command(alias = "t")]
    Traits,
    /// Collections built in one expression
    #[command(alias = "co")]
    Collections,
    /// The string utility belt
    #[command(alias = "s")]
    Strings,
    /// A look at our own process
    #[command(alias = "p")]
    Process,
    /// Run every demonstration in tour order
    #[command(alias = "a")]
    All,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
