//! Project configuration (`pinfont.toml`)
//!
//! Every key is optional; a project with no config file gets the defaults:
//!
//! ```toml
//! source_dir = "svgs"
//! map_path = "build/unicode-map.json"
//! extension = "svg"
//! base_codepoint = "ea01"
//! use_iconignore = true
//!
//! [font]
//! name = "icons"
//! class_prefix = "icon"
//!
//! [generator]
//! command = "node"
//! args = ["build/generate-font.js"]
//! ```

use anyhow::{Context, Result};
use pf_core::{Codepoint, DEFAULT_BASE, PRIVATE_USE_END, PRIVATE_USE_START};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up at the project root
pub const CONFIG_FILE: &str = "pinfont.toml";

/// Top-level project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Icon source directory, relative to the project root
    pub source_dir: PathBuf,

    /// Persisted codepoint record, relative to the project root
    pub map_path: PathBuf,

    /// Icon file extension, without the dot
    pub extension: String,

    /// Lowest codepoint handed out to new icons
    pub base_codepoint: Codepoint,

    /// Honour `.iconignore` in the source directory
    pub use_iconignore: bool,

    pub font: FontConfig,

    pub generator: GeneratorConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("svgs"),
            map_path: PathBuf::from(store::DEFAULT_MAP_PATH),
            extension: scanner::DEFAULT_EXTENSION.to_string(),
            base_codepoint: DEFAULT_BASE,
            use_iconignore: true,
            font: FontConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Settings forwarded to the font generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Font family name
    pub name: String,

    /// CSS class prefix for generated rules
    pub class_prefix: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: "icons".to_string(),
            class_prefix: "icon".to_string(),
        }
    }
}

/// External font generator invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Program to run; `None` disables `pinfont build`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl ProjectConfig {
    /// Load `pinfont.toml` from `root`, falling back to defaults if absent
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} at {}; using defaults", CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.contains('.') {
            anyhow::bail!(
                "extension must be a bare file extension like \"svg\", got {:?}",
                self.extension
            );
        }

        if !self.base_codepoint.is_private_use() {
            anyhow::bail!(
                "base_codepoint {} is outside the private-use area ({}-{})",
                self.base_codepoint,
                PRIVATE_USE_START,
                PRIVATE_USE_END
            );
        }

        if self.font.name.trim().is_empty() {
            anyhow::bail!("font.name must not be empty");
        }

        if matches!(self.generator.command.as_deref(), Some(cmd) if cmd.trim().is_empty()) {
            anyhow::bail!("generator.command must not be empty");
        }

        Ok(())
    }

    /// Icon source directory resolved against `root`
    pub fn source_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    /// Record file resolved against `root`
    pub fn map_path(&self, root: &Path) -> PathBuf {
        root.join(&self.map_path)
    }
}

/// Example configuration with every key spelled out
pub fn example_config() -> &'static str {
    r#"# pinfont.toml - place at the project root

# Directory scanned (recursively) for icon sources
source_dir = "svgs"

# Persisted identifier -> codepoint record; commit this file
map_path = "build/unicode-map.json"

# Icon file extension
extension = "svg"

# First codepoint handed out to new icons (private-use area, hex)
base_codepoint = "ea01"

# Skip paths listed in <source_dir>/.iconignore
use_iconignore = true

[font]
name = "icons"
class_prefix = "icon"

[generator]
# Run with PINFONT_STAGING_DIR, PINFONT_MANIFEST, PINFONT_FONT_NAME,
# PINFONT_CLASS_PREFIX and PINFONT_START_CODEPOINT in the environment
command = "node"
args = ["build/generate-font.js"]
"#
}
