//! Print the effective configuration

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use pinfont_cli::config::example_config;
use pinfont_cli::{ProjectConfig, CONFIG_FILE};
use std::path::Path;

pub fn run(root: &Path, example: bool) -> Result<()> {
    if example {
        print!("{}", example_config());
        return Ok(());
    }

    let config = ProjectConfig::load(root)?;
    let config_path = root.join(CONFIG_FILE);

    println!("{}", "Project Configuration".bold());
    if config_path.exists() {
        println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());
    } else {
        println!(
            "{}\n",
            format!("No {} at {}; showing defaults", CONFIG_FILE, root.display()).yellow()
        );
    }

    let text = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    print!("{}", text);
    Ok(())
}
