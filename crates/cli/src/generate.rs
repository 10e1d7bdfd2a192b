//! Boundary to the external font generator
//!
//! pinfont does not rasterize glyphs itself. It stages the icon sources,
//! resolves the codepoint of every staged glyph, and hands both to a
//! generator. The shipped generator runs a configured command with a JSON
//! manifest describing the job.

use crate::config::{FontConfig, GeneratorConfig};
use crate::staging::StagedGlyph;
use pf_core::{Codepoint, CodepointResolver};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Manifest file written into the staging directory
pub const MANIFEST_FILE: &str = "pinfont-manifest.json";

/// Errors from the generation stage
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// `[generator] command` is not set
    #[error("no font generator configured (set [generator] command in pinfont.toml)")]
    NotConfigured,

    /// The staging directory could not be prepared
    #[error("failed to stage icon sources")]
    Staging(#[source] std::io::Error),

    /// The manifest could not be written
    #[error("failed to write generator manifest {}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generator could not be started
    #[error("failed to run font generator '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator exited unsuccessfully
    #[error("font generator '{command}' exited with status {code}")]
    Failed { command: String, code: i32 },

    /// The generator was killed by a signal
    #[error("font generator '{command}' was terminated by a signal")]
    Terminated { command: String },
}

/// Everything a generator needs for one build
pub struct GenerationJob<'a> {
    /// Directory holding the staged sources
    pub staging_dir: &'a Path,
    pub font: &'a FontConfig,
    /// Where the generator's own numbering starts
    pub start: Codepoint,
    pub resolver: CodepointResolver<'a>,
    /// Staged glyphs in the order the generator visits them
    pub glyphs: Vec<StagedGlyph>,
}

impl GenerationJob<'_> {
    /// Resolve every staged glyph, threading the generator counter
    pub fn manifest(&self) -> Manifest {
        let resolved = self
            .resolver
            .resolve_all(self.glyphs.iter().map(|g| g.identifier.as_str()), self.start);

        let glyphs = self
            .glyphs
            .iter()
            .zip(resolved)
            .map(|(glyph, (name, codepoint))| ManifestGlyph {
                name,
                file: glyph.file_name.clone(),
                codepoint,
            })
            .collect();

        Manifest {
            font_name: self.font.name.clone(),
            class_prefix: self.font.class_prefix.clone(),
            start_codepoint: self.start,
            glyphs,
        }
    }
}

/// JSON description of a generation job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub font_name: String,
    pub class_prefix: String,
    pub start_codepoint: Codepoint,
    pub glyphs: Vec<ManifestGlyph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestGlyph {
    pub name: String,
    pub file: String,
    pub codepoint: Codepoint,
}

/// Turns staged sources into font files
pub trait FontGenerator {
    fn generate(&self, job: &GenerationJob<'_>) -> Result<(), GenerationError>;
}

/// Runs an external program as the font generator
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    command: Option<String>,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandGenerator {
    /// Generator from config, run with `working_dir` as its current directory
    pub fn new(config: &GeneratorConfig, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            working_dir: working_dir.into(),
        }
    }

    /// Write the manifest into the staging directory
    fn write_manifest(&self, job: &GenerationJob<'_>) -> Result<PathBuf, GenerationError> {
        let path = job.staging_dir.join(MANIFEST_FILE);
        let mut json = serde_json::to_string_pretty(&job.manifest()).map_err(|e| {
            GenerationError::Manifest {
                path: path.clone(),
                source: e.into(),
            }
        })?;
        json.push('\n');

        std::fs::write(&path, json).map_err(|source| GenerationError::Manifest {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote generator manifest {}", path.display());
        Ok(path)
    }
}

impl FontGenerator for CommandGenerator {
    fn generate(&self, job: &GenerationJob<'_>) -> Result<(), GenerationError> {
        let command = self.command.as_deref().ok_or(GenerationError::NotConfigured)?;
        let manifest = self.write_manifest(job)?;

        info!("Running font generator: {} {:?}", command, self.args);
        let status = Command::new(command)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .env("PINFONT_STAGING_DIR", job.staging_dir)
            .env("PINFONT_MANIFEST", &manifest)
            .env("PINFONT_FONT_NAME", &job.font.name)
            .env("PINFONT_CLASS_PREFIX", &job.font.class_prefix)
            .env("PINFONT_START_CODEPOINT", job.start.to_hex())
            .status()
            .map_err(|source| GenerationError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(GenerationError::Failed {
                command: command.to_string(),
                code,
            }),
            None => Err(GenerationError::Terminated {
                command: command.to_string(),
            }),
        }
    }
}
