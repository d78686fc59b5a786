mod commands;
mod terminal;

use commands::{CommandLine, Commands};
use rustour_common::config::Config;
use rustour_common::{info, random};
use rustour_core::Demo;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        no_color: commands.no_color,
        seed: commands.seed,
    };

    random::set_seed(cfg.seed);
    print::initialize(&cfg);
    print::banner(&cfg);

    if let Some(seed) = cfg.seed {
        if cfg.quiet == 0 {
            info!("sample data seeded with {seed}");
        }
    }

    match commands.command {
        Commands::Resources => one(&cfg, "resources"),
        Commands::Closures => one(&cfg, "closures"),
        Commands::Iterators => one(&cfg, "iterators"),
        Commands::Loops => one(&cfg, "loops"),
        Commands::Datetime => one(&cfg, "datetime"),
        Commands::Traits => one(&cfg, "traits"),
        Commands::Collections => one(&cfg, "collections"),
        Commands::Strings => one(&cfg, "strings"),
        Commands::Process => one(&cfg, "process"),
        Commands::All => all(&cfg),
    }
}

fn one(cfg: &Config, name: &str) -> anyhow::Result<()> {
    let demo: &Demo = rustour_core::find(name)
        .ok_or_else(|| anyhow::anyhow!("unknown demonstration: {name}"))?;
    print::header(demo.title, cfg.quiet);
    (demo.run)(cfg)
}

fn all(cfg: &Config) -> anyhow::Result<()> {
    for (idx, demo) in rustour_core::DEMOS.iter().enumerate() {
        if idx > 0 {
            print::rule(cfg.quiet);
        }
        print::header(demo.title, cfg.quiet);
        (demo.run)(cfg)?;
    }
    print::tour_complete(rustour_core::DEMOS.len(), cfg.quiet);
    Ok(())
}
