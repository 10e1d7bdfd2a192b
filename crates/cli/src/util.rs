//! Shared utilities for CLI commands

use crate::config::CONFIG_FILE;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use pf_core::{ChangeSet, Codepoint};
use std::path::{Path, PathBuf};

/// Find the project root by walking up from `start` to the first
/// directory holding `pinfont.toml`; `start` itself if there is none
pub fn find_project_root_from(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(CONFIG_FILE).is_file() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}

/// Resolve the project root from an explicit `--root` or the current directory
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(root) => Ok(root),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Ok(find_project_root_from(&cwd))
        }
    }
}

/// Render a codepoint as `U+EA01`
pub fn format_codepoint(codepoint: Codepoint) -> String {
    format!("U+{:04X}", codepoint.value())
}

/// Print one line per edit in a change set
pub fn print_changes(changes: &ChangeSet) {
    for (identifier, codepoint) in &changes.removed {
        println!(
            "  {} {} {}",
            "-".red(),
            identifier,
            format_codepoint(*codepoint).dimmed()
        );
    }
    for reassignment in &changes.reassigned {
        println!(
            "  {} {} {} -> {}",
            "~".yellow(),
            reassignment.identifier,
            format_codepoint(reassignment.from).dimmed(),
            format_codepoint(reassignment.to)
        );
    }
    for (identifier, codepoint) in &changes.added {
        println!(
            "  {} {} {}",
            "+".green(),
            identifier,
            format_codepoint(*codepoint)
        );
    }
}

/// One-line summary of a change set
pub fn summarize_changes(changes: &ChangeSet) -> String {
    format!(
        "{} added, {} removed, {} reassigned",
        changes.added.len(),
        changes.removed.len(),
        changes.reassigned.len()
    )
}
