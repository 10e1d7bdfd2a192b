//! Recursive identifier scan

use crate::ignore::IgnoreRules;
use crate::ScanError;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extension of vector icon sources
pub const DEFAULT_EXTENSION: &str = "svg";

/// Icons found under a source root
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Identifier -> source file
    icons: BTreeMap<String, PathBuf>,
    /// Matching files seen, including shadowed duplicates
    files_seen: usize,
    /// Identifiers that appeared more than once
    duplicates: BTreeSet<String>,
}

impl Scan {
    /// Set of identifiers present
    pub fn identifiers(&self) -> BTreeSet<String> {
        self.icons.keys().cloned().collect()
    }

    /// Identifier and source path pairs, in identifier order
    pub fn sources(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.icons.iter().map(|(id, path)| (id.as_str(), path.as_path()))
    }

    /// Source file for an identifier
    pub fn source(&self, identifier: &str) -> Option<&Path> {
        self.icons.get(identifier).map(PathBuf::as_path)
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Number of matching files, counting duplicates
    pub fn files_seen(&self) -> usize {
        self.files_seen
    }

    /// Identifiers backed by more than one file
    pub fn duplicates(&self) -> &BTreeSet<String> {
        &self.duplicates
    }
}

/// Enumerates icon identifiers below a directory
#[derive(Debug, Clone)]
pub struct IdentifierScanner {
    extension: String,
    use_iconignore: bool,
}

impl Default for IdentifierScanner {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}

impl IdentifierScanner {
    /// Scanner matching files with the given extension (without the dot)
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            use_iconignore: true,
        }
    }

    /// Enable or disable `.iconignore` handling
    pub fn with_iconignore(mut self, enabled: bool) -> Self {
        self.use_iconignore = enabled;
        self
    }

    /// Extension matched by this scanner
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Walk `root` and collect every icon identifier
    ///
    /// Entries are visited in file-name order so that, when two files in
    /// different directories share a stem, the last one visited wins
    /// deterministically.
    pub fn scan(&self, root: &Path) -> Result<Scan, ScanError> {
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(ScanError::NotADirectory(root.to_path_buf())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ScanError::SourceMissing(root.to_path_buf()))
            }
            Err(source) => {
                return Err(ScanError::Unreadable {
                    path: root.to_path_buf(),
                    source,
                })
            }
        }

        let rules = IgnoreRules::load(root, self.use_iconignore)?;
        let mut scan = Scan::default();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.depth() == 0 {
                    return true;
                }
                match e.path().strip_prefix(root) {
                    Ok(rel) => !rules.should_ignore(rel, e.file_type().is_dir()),
                    Err(_) => true,
                }
            });

        for entry in walker {
            let entry = entry?;

            let path = entry.path();
            if !is_icon_file(&entry) {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }

            let identifier = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => {
                    warn!("Skipping icon with non UTF-8 name: {}", path.display());
                    continue;
                }
            };

            scan.files_seen += 1;
            if let Some(previous) = scan.icons.insert(identifier.clone(), path.to_path_buf()) {
                warn!(
                    "Icon '{}' found more than once; {} shadows {}",
                    identifier,
                    path.display(),
                    previous.display()
                );
                scan.duplicates.insert(identifier);
            }
        }

        debug!(
            "Scanned {}: {} files, {} identifiers",
            root.display(),
            scan.files_seen,
            scan.icons.len()
        );
        if rules.has_iconignore() {
            info!("Applied {} from {}", crate::ICONIGNORE_FILE, root.display());
        }

        Ok(scan)
    }
}

/// Regular files, and symlinks that resolve to one
///
/// Symlinked directories are never descended into.
fn is_icon_file(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    if !entry.path_is_symlink() {
        return false;
    }
    match fs::metadata(entry.path()) {
        Ok(meta) => meta.is_file(),
        Err(e) => {
            warn!("Skipping dangling link {}: {}", entry.path().display(), e);
            false
        }
    }
}
