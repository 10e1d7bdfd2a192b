//! Update the codepoint map without generating a font

use anyhow::Result;
use owo_colors::OwoColorize;
use pinfont_cli::{Pipeline, ProjectConfig};
use std::path::Path;

pub fn run(root: &Path) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let pipeline = Pipeline::new(root, config);

    let report = pipeline.sync(&mut super::report)?;

    println!(
        "{} {} ({} icons)",
        "[done]".green().bold(),
        pipeline.store().path().display(),
        report.record().len()
    );
    Ok(())
}
