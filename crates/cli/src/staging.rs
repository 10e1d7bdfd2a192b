//! Transient staging directory for the font generator

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Name prefix of staging directories created under the project root
pub const STAGING_PREFIX: &str = ".pinfont-staging-";

/// A glyph source copied into the staging directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedGlyph {
    pub identifier: String,
    /// File name inside the staging directory
    pub file_name: String,
}

/// Flat working copy of the icon sources
///
/// The directory and everything in it is removed when the guard is
/// dropped, whichever way the build exits.
pub struct StagingDir {
    dir: TempDir,
    glyphs: Vec<StagedGlyph>,
}

impl StagingDir {
    /// Create a fresh, uniquely named staging directory under `parent`
    pub fn create(parent: &Path) -> io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)?;
        debug!("Created staging directory {}", dir.path().display());

        Ok(Self {
            dir,
            glyphs: Vec::new(),
        })
    }

    /// Copy `source` in as `<identifier>.<extension>`
    ///
    /// Staging the same identifier twice overwrites the earlier copy.
    pub fn stage(&mut self, identifier: &str, source: &Path, extension: &str) -> io::Result<PathBuf> {
        let file_name = format!("{identifier}.{extension}");
        let target = self.dir.path().join(&file_name);
        fs::copy(source, &target)?;

        self.glyphs.retain(|g| g.identifier != identifier);
        self.glyphs.push(StagedGlyph {
            identifier: identifier.to_string(),
            file_name,
        });
        Ok(target)
    }

    /// Path of the staging directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Glyphs staged so far, in staging order
    pub fn glyphs(&self) -> &[StagedGlyph] {
        &self.glyphs
    }

    /// Remove the directory now, reporting any failure
    pub fn close(self) -> io::Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        debug!("Removed staging directory {}", path.display());
        Ok(())
    }
}
