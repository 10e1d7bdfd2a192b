//! Report whether the codepoint map is out of date

use anyhow::Result;
use owo_colors::OwoColorize;
use pinfont_cli::{util, Pipeline, ProjectConfig};
use std::path::Path;

/// Returns `Ok(true)` when the map on disk matches the icon sources
pub fn run(root: &Path) -> Result<bool> {
    let config = ProjectConfig::load(root)?;
    let pipeline = Pipeline::new(root, config);

    let plan = pipeline.plan(&mut super::report)?;

    if !plan.changed() {
        println!("{} Codepoint map is up to date", "✓".green());
        return Ok(true);
    }

    println!(
        "{} Codepoint map is out of date: {}",
        "✗".red(),
        util::summarize_changes(&plan.maintained.changes)
    );
    util::print_changes(&plan.maintained.changes);
    println!("Run 'pinfont sync' to update {}", pipeline.store().path().display());
    Ok(false)
}
