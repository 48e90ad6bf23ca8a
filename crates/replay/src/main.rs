//! Scripted input replay for the combo engine.
//!
//! Drives one character through a RON input script and prints the frames the
//! presentation layer would receive. Run with: `combo-replay <command>`

mod commands;
mod script;

use anyhow::Result;
use clap::Parser;
use commands::{Catalog, Run, Tree};

/// Replay and inspect combo content
#[derive(Parser)]
#[command(name = "combo-replay")]
#[command(about = "Replay input scripts through a combo character", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay an input script and print per-tick frames
    Run(Run),

    /// List the chains of an action catalog
    Catalog(Catalog),

    /// Inspect an action tree and convert it to its flat form
    Tree(Tree),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Catalog(cmd) => cmd.execute(),
        Command::Tree(cmd) => cmd.execute(),
    }
}
