//! Print the persisted codepoint map

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use pinfont_cli::{util, ProjectConfig};
use std::path::Path;
use store::{LoadOutcome, MapStore};

pub fn run(root: &Path) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let store = MapStore::new(config.map_path(root));

    let record = match store.load().context("Failed to load codepoint map")? {
        LoadOutcome::Loaded(record) => record,
        LoadOutcome::Missing => {
            println!("No codepoint map at {}", store.path().display());
            println!("Run 'pinfont sync' to create it");
            return Ok(());
        }
        LoadOutcome::Corrupt { reason } => {
            anyhow::bail!("Codepoint map {} is unreadable: {}", store.path().display(), reason)
        }
    };

    println!("{}", "Codepoint Map".bold());
    println!("{}: {}\n", "Location".dimmed(), store.path().display().dimmed());

    let width = record.identifiers().map(str::len).max().unwrap_or(0);
    for (identifier, codepoint) in record.iter() {
        let glyph = codepoint.as_char().map(String::from).unwrap_or_default();
        println!(
            "  {}  {}  {}",
            format!("{:width$}", identifier).cyan(),
            util::format_codepoint(codepoint).yellow(),
            glyph
        );
    }

    println!("\n{} icons", record.len());
    Ok(())
}
