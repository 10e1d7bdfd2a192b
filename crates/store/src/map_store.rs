//! On-disk codepoint record
//!
//! The record is a JSON object mapping identifier to lowercase hex
//! codepoint, keys ascending, two-space indent, trailing newline:
//!
//! ```text
//! {
//!   "home": "ea01",
//!   "user": "ea02"
//! }
//! ```

use crate::atomic::atomic_write;
use crate::{Result, StoreError};
use pf_core::CodepointRecord;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default record location relative to the project root
pub const DEFAULT_MAP_PATH: &str = "build/unicode-map.json";

/// What `MapStore::load` found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The record parsed cleanly
    Loaded(CodepointRecord),
    /// No record file yet
    Missing,
    /// The file exists but is not a valid record; prior assignments are lost
    Corrupt { reason: String },
}

impl LoadOutcome {
    /// The loaded record, or an empty one when missing or corrupt
    pub fn into_record(self) -> CodepointRecord {
        match self {
            LoadOutcome::Loaded(record) => record,
            LoadOutcome::Missing | LoadOutcome::Corrupt { .. } => CodepointRecord::new(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt { .. })
    }
}

/// Reader/writer for the persisted record file
#[derive(Debug, Clone)]
pub struct MapStore {
    path: PathBuf,
}

impl MapStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the record file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record from disk
    ///
    /// A missing file is `Missing`; content that is not an object of
    /// identifier -> hex string is `Corrupt`. Only failures to read an
    /// existing file are errors.
    pub fn load(&self) -> Result<LoadOutcome> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No codepoint map at {}", self.path.display());
                return Ok(LoadOutcome::Missing);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                let reason = "file is not valid UTF-8".to_string();
                warn!("Cannot parse codepoint map {}: {}", self.path.display(), reason);
                return Ok(LoadOutcome::Corrupt { reason });
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str::<CodepointRecord>(&text) {
            Ok(record) => {
                debug!("Loaded {} codepoints from {}", record.len(), self.path.display());
                Ok(LoadOutcome::Loaded(record))
            }
            Err(e) => {
                let reason = e.to_string();
                warn!("Cannot parse codepoint map {}: {}", self.path.display(), reason);
                Ok(LoadOutcome::Corrupt { reason })
            }
        }
    }

    /// Write the record if `changed`, returning whether a write happened
    ///
    /// The file is always replaced whole with its canonical form.
    pub fn save(&self, record: &CodepointRecord, changed: bool) -> Result<bool> {
        if !changed {
            debug!("Codepoint map unchanged; not writing {}", self.path.display());
            return Ok(false);
        }

        let json = to_canonical_json(record)?;
        atomic_write(&self.path, json.as_bytes()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!("Wrote {} codepoints to {}", record.len(), self.path.display());
        Ok(true)
    }

    /// Copy the current file to `<file>.corrupt`
    ///
    /// Called before a corrupt record is overwritten so the lost
    /// assignments can be recovered by hand. Returns the backup path, or
    /// `None` if there was nothing to back up.
    pub fn backup_corrupt(&self) -> Result<Option<PathBuf>> {
        let backup = self.backup_path();
        match fs::copy(&self.path, &backup) {
            Ok(_) => {
                warn!("Backed up unreadable codepoint map to {}", backup.display());
                Ok(Some(backup))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Write {
                path: backup,
                source,
            }),
        }
    }

    /// Path used by `backup_corrupt`
    pub fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".corrupt");
        PathBuf::from(name)
    }
}

/// Canonical serialized form of a record
///
/// Same logical content always yields the same bytes.
pub fn to_canonical_json(record: &CodepointRecord) -> Result<String> {
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    Ok(json)
}
