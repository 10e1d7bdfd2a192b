//! pinfont CLI - stable codepoints for icon fonts

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing::Level;

mod cmd;

/// pinfont - keep icon font codepoints stable across rebuilds
#[derive(Parser)]
#[command(name = "pinfont")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root (default: nearest directory with pinfont.toml, else the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Update the codepoint map and run the font generator
    Build,
    /// Update the codepoint map only
    Sync,
    /// Exit non-zero if the codepoint map is out of date
    Check,
    /// Print the codepoint map
    Show,
    /// Print the effective configuration
    Config {
        /// Print an example pinfont.toml instead
        #[arg(long)]
        example: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "[failed]".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Dispatch a command; `Ok(false)` means "ran fine but report failure"
fn run(cli: Cli) -> Result<bool> {
    let root = pinfont_cli::util::resolve_root(cli.root)?;

    match cli.command {
        Commands::Build => cmd::build::run(&root).map(|_| true),
        Commands::Sync => cmd::sync::run(&root).map(|_| true),
        Commands::Check => cmd::check::run(&root),
        Commands::Show => cmd::show::run(&root).map(|_| true),
        Commands::Config { example } => cmd::config::run(&root, example).map(|_| true),
    }
}
