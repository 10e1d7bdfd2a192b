//! Persistence for the codepoint record
//!
//! This crate provides:
//! - `MapStore`: load/save of the identifier -> codepoint JSON file
//! - `LoadOutcome`: tagged load result separating a missing file from a
//!   corrupt one
//! - `atomic_write`: crash-safe full-file replacement

pub mod atomic;
pub mod map_store;

pub use atomic::atomic_write;
pub use map_store::{to_canonical_json, LoadOutcome, MapStore, DEFAULT_MAP_PATH};

use std::path::PathBuf;

/// Errors raised by the record store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record file exists but could not be read
    #[error("failed to read codepoint map {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record file could not be written
    #[error("failed to write codepoint map {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be serialized
    #[error("failed to serialize codepoint map")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
