//! Update the codepoint map and run the font generator

use anyhow::Result;
use owo_colors::OwoColorize;
use pinfont_cli::{CommandGenerator, Pipeline, ProjectConfig};
use std::path::Path;

pub fn run(root: &Path) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let generator = CommandGenerator::new(&config.generator, root);
    let pipeline = Pipeline::new(root, config);

    let report = pipeline.build(&generator, &mut super::report)?;

    println!(
        "{} Icon font built ({} glyphs)",
        "[done]".green().bold(),
        report.record().len()
    );
    Ok(())
}
