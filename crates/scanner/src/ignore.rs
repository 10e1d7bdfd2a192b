//! Ignore rules for the icon source tree
//!
//! Two sources of ignore patterns:
//! 1. Built-in patterns (VCS directories, editor and OS droppings - always active)
//! 2. `.iconignore` at the source root (gitignore syntax, optional)

use crate::ScanError;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Name of the optional ignore file at the source root
pub const ICONIGNORE_FILE: &str = ".iconignore";

/// Ignore rule set for one source root
pub struct IgnoreRules {
    /// Patterns from `.iconignore`, if present and enabled
    iconignore: Option<Gitignore>,
}

impl IgnoreRules {
    /// Load ignore rules for a source root
    pub fn load(root: &Path, use_iconignore: bool) -> Result<Self, ScanError> {
        let mut rules = Self {
            iconignore: None,
        };

        if use_iconignore {
            let path = root.join(ICONIGNORE_FILE);
            if path.is_file() {
                let mut builder = GitignoreBuilder::new(root);
                if let Some(err) = builder.add(&path) {
                    return Err(err.into());
                }
                rules.iconignore = Some(builder.build()?);
            }
        }

        Ok(rules)
    }

    /// Check if a path (relative to the root) should be skipped
    pub fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        if is_builtin_ignored(path) {
            return true;
        }

        match self.iconignore {
            Some(ref iconignore) => iconignore.matched(path, is_dir).is_ignore(),
            None => false,
        }
    }

    /// Whether a `.iconignore` file is in effect
    pub fn has_iconignore(&self) -> bool {
        self.iconignore.is_some()
    }
}

/// Check if path matches built-in ignore patterns
fn is_builtin_ignored(path: &Path) -> bool {
    for component in path.components() {
        if let Some(name) = component.as_os_str().to_str() {
            if matches!(name, ".git" | ".hg" | ".svn") {
                return true;
            }
        }
    }

    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    is_editor_temp(filename)
}

/// Editor swap/backup files and OS metadata files
fn is_editor_temp(filename: &str) -> bool {
    // Vim swap files
    if filename.ends_with(".swp") || filename.ends_with(".swo") || filename.ends_with(".swn") {
        return true;
    }

    // Vim/Emacs backup files
    if filename.ends_with('~') {
        return true;
    }

    // Emacs auto-save and lock files
    if (filename.len() > 1 && filename.starts_with('#') && filename.ends_with('#'))
        || filename.starts_with(".#")
    {
        return true;
    }

    // macOS Finder metadata and AppleDouble forks (`._home.svg`)
    filename == ".DS_Store" || filename.starts_with("._")
}
