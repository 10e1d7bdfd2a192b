//! CLI command implementations

pub mod build;
pub mod check;
pub mod config;
pub mod show;
pub mod sync;

use owo_colors::OwoColorize;
use pinfont_cli::util;
use pinfont_cli::Event;
use store::LoadOutcome;

/// Print a console line for each pipeline stage
pub fn report(event: Event<'_>) {
    match event {
        Event::Scanned(scan) => {
            println!(
                "{} Scanned {} icon files ({} icons)",
                "[info]".cyan(),
                scan.files_seen(),
                scan.len()
            );
            for identifier in scan.duplicates() {
                println!(
                    "{} Icon '{}' exists in more than one directory; using {}",
                    "[warn]".yellow(),
                    identifier,
                    scan.source(identifier).map(|p| p.display().to_string()).unwrap_or_default()
                );
            }
        }
        Event::Loaded(LoadOutcome::Loaded(record)) => {
            println!("{} Loaded {} pinned codepoints", "[info]".cyan(), record.len());
        }
        Event::Loaded(LoadOutcome::Missing) => {
            println!("{} No codepoint map yet; starting fresh", "[info]".cyan());
        }
        Event::Loaded(LoadOutcome::Corrupt { reason }) => {
            println!(
                "{} Codepoint map is unreadable ({}); every icon will be reassigned",
                "[warn]".yellow(),
                reason
            );
        }
        Event::Maintained { changes, written, backup } => {
            if let Some(backup) = backup {
                println!(
                    "{} Previous codepoint map saved to {}",
                    "[warn]".yellow(),
                    backup.display()
                );
            }
            if written {
                println!(
                    "{} Updated codepoint map: {}",
                    "[info]".cyan(),
                    util::summarize_changes(changes)
                );
                util::print_changes(changes);
            } else {
                println!("{} Codepoint map is up to date", "[info]".cyan());
            }
        }
        Event::Staged { count } => {
            println!("{} Staged {} icons", "[info]".cyan(), count);
        }
        Event::Generating => {
            println!("{} Generating font files", "[info]".cyan());
        }
        Event::Generated => {}
    }
}
