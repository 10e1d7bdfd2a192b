//! Icon project fixtures

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Throwaway project directory with a `svgs/` tree
pub struct IconProject {
    dir: TempDir,
}

impl IconProject {
    /// Create a project containing the given icon paths (relative to `svgs/`)
    pub fn with_icons(icons: &[&str]) -> Result<Self> {
        let project = Self { dir: TempDir::new()? };
        fs::create_dir_all(project.source_dir())?;
        for icon in icons {
            project.add_icon(icon)?;
        }
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root().join("svgs")
    }

    pub fn map_path(&self) -> PathBuf {
        self.root().join("build/unicode-map.json")
    }

    /// Write an icon source (relative to `svgs/`)
    pub fn add_icon(&self, rel: &str) -> Result<()> {
        let path = self.source_dir().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("<svg><title>{rel}</title></svg>"))?;
        Ok(())
    }

    /// Delete an icon source (relative to `svgs/`)
    pub fn remove_icon(&self, rel: &str) -> Result<()> {
        fs::remove_file(self.source_dir().join(rel))?;
        Ok(())
    }

    /// Write `pinfont.toml`
    pub fn write_config(&self, text: &str) -> Result<()> {
        fs::write(self.root().join("pinfont.toml"), text)?;
        Ok(())
    }

    /// Overwrite the codepoint map
    pub fn write_map(&self, text: &str) -> Result<()> {
        let path = self.map_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)?;
        Ok(())
    }

    pub fn read_map(&self) -> Result<String> {
        Ok(fs::read_to_string(self.map_path())?)
    }

    /// Leftover staging directories in the project root
    pub fn staging_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(self.root())? {
            let path = entry?.path();
            let is_staging = path
                .file_name()
                .map(|n| n.to_string_lossy().starts_with(".pinfont-staging-"))
                .unwrap_or(false);
            if is_staging {
                dirs.push(path);
            }
        }
        Ok(dirs)
    }
}
