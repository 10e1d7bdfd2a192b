//! Icon source scanning for pinfont
//!
//! Walks the icon source tree and yields the identifiers (file stems) of
//! every vector icon found, together with the file each one came from.

pub mod ignore;
pub mod scan;

pub use crate::ignore::{IgnoreRules, ICONIGNORE_FILE};
pub use scan::{IdentifierScanner, Scan, DEFAULT_EXTENSION};

use std::path::PathBuf;

/// Errors raised while scanning the icon source tree
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The source root does not exist
    #[error("icon source directory not found: {}", .0.display())]
    SourceMissing(PathBuf),

    /// The source root exists but is not a directory
    #[error("icon source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The source root could not be inspected
    #[error("cannot read icon source directory {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Traversal failed below the root
    #[error("failed to walk icon sources")]
    Walk(#[from] walkdir::Error),

    /// `.iconignore` could not be parsed
    #[error("invalid ignore file")]
    Ignore(#[from] ::ignore::Error),
}
