//! `HeroesData` CLI - Command-line interface for game data lookup

pub mod commands;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

use crate::locale::Localization;

#[derive(Parser)]
#[command(name = "heroesdata")]
#[command(about = "HeroesData: Heroes of the Storm game data lookup", long_about = None)]
#[command(version)]
struct Cli {
    /// Game strings document to overlay onto resolved entities
    #[arg(long, global = true)]
    gamestrings: Option<PathBuf>,

    /// Locale of the game strings (overrides meta.locale and the file name)
    #[arg(long, global = true)]
    locale: Option<Localization>,

    /// Print only the requested data
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Global options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub gamestrings: Option<PathBuf>,
    pub locale: Option<Localization>,
    pub quiet: bool,
}

/// Run the `HeroesData` CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let globals = GlobalArgs {
        gamestrings: cli.gamestrings,
        locale: cli.locale,
        quiet: cli.quiet,
    };
    cli.command.execute(&globals)?;

    Ok(())
}
