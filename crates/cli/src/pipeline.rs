//! Scan -> maintain -> persist -> generate orchestration
//!
//! The record is an explicit value threaded through each step; nothing is
//! kept in global state. The staging directory lives in an RAII guard so it
//! is removed on every exit path, including generator failure.

use crate::config::ProjectConfig;
use crate::generate::{FontGenerator, GenerationError, GenerationJob};
use crate::staging::StagingDir;
use anyhow::{Context, Result};
use pf_core::{ChangeSet, CodepointMaintainer, CodepointRecord, CodepointResolver, Maintained};
use scanner::{IdentifierScanner, Scan};
use std::path::{Path, PathBuf};
use store::{LoadOutcome, MapStore};
use tracing::{info, warn};

/// Progress notifications emitted while a pipeline runs
#[derive(Debug)]
pub enum Event<'a> {
    /// Icon sources scanned
    Scanned(&'a Scan),
    /// Persisted record read
    Loaded(&'a LoadOutcome),
    /// Maintenance finished; `written` tells whether the file was rewritten
    Maintained {
        changes: &'a ChangeSet,
        written: bool,
        backup: Option<&'a Path>,
    },
    /// Sources copied into the staging directory
    Staged { count: usize },
    /// Generator about to run
    Generating,
    /// Generator finished successfully
    Generated,
}

/// Result of scanning and maintaining without writing anything
#[derive(Debug)]
pub struct Plan {
    pub scan: Scan,
    pub load: LoadOutcome,
    pub maintained: Maintained,
}

impl Plan {
    /// Whether the persisted record needs rewriting
    pub fn changed(&self) -> bool {
        self.maintained.changed()
    }
}

/// Result of a sync: the plan plus what was written
#[derive(Debug)]
pub struct SyncReport {
    pub plan: Plan,
    pub written: bool,
    pub backup: Option<PathBuf>,
}

impl SyncReport {
    pub fn record(&self) -> &CodepointRecord {
        &self.plan.maintained.record
    }
}

/// One project's pipeline
pub struct Pipeline {
    root: PathBuf,
    config: ProjectConfig,
}

impl Pipeline {
    pub fn new(root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Record store for this project
    pub fn store(&self) -> MapStore {
        MapStore::new(self.config.map_path(&self.root))
    }

    fn scanner(&self) -> IdentifierScanner {
        IdentifierScanner::new(self.config.extension.clone()).with_iconignore(self.config.use_iconignore)
    }

    fn maintainer(&self) -> Result<CodepointMaintainer> {
        Ok(CodepointMaintainer::with_base(self.config.base_codepoint)?)
    }

    /// Scan, load and maintain in memory
    pub fn plan(&self, on_event: &mut dyn FnMut(Event<'_>)) -> Result<Plan> {
        let source_dir = self.config.source_dir(&self.root);
        let scan = self
            .scanner()
            .scan(&source_dir)
            .context("Failed to scan icon sources")?;
        on_event(Event::Scanned(&scan));

        let load = self.store().load().context("Failed to load codepoint map")?;
        on_event(Event::Loaded(&load));

        let maintained = self
            .maintainer()?
            .maintain(&scan.identifiers(), load.clone().into_record())
            .context("Failed to allocate codepoints")?;

        Ok(Plan {
            scan,
            load,
            maintained,
        })
    }

    /// Plan, then persist the record if it changed
    pub fn sync(&self, on_event: &mut dyn FnMut(Event<'_>)) -> Result<SyncReport> {
        let plan = self.plan(on_event)?;
        let store = self.store();

        let backup = if plan.load.is_corrupt() && plan.changed() {
            store.backup_corrupt().context("Failed to back up corrupt codepoint map")?
        } else {
            None
        };

        let written = store
            .save(&plan.maintained.record, plan.changed())
            .context("Failed to save codepoint map")?;

        on_event(Event::Maintained {
            changes: &plan.maintained.changes,
            written,
            backup: backup.as_deref(),
        });

        Ok(SyncReport {
            plan,
            written,
            backup,
        })
    }

    /// Full build: stage sources, sync the record, run the generator
    ///
    /// The record is persisted before generation starts, so a failing
    /// generator does not lose new assignments. The staging directory is
    /// removed before this returns, success or not.
    pub fn build<G: FontGenerator + ?Sized>(
        &self,
        generator: &G,
        on_event: &mut dyn FnMut(Event<'_>),
    ) -> Result<SyncReport> {
        let mut staging = StagingDir::create(&self.root)
            .map_err(GenerationError::Staging)
            .context("Failed to create staging directory")?;

        let report = self.sync(on_event)?;

        for (identifier, source) in report.plan.scan.sources() {
            staging
                .stage(identifier, source, &self.config.extension)
                .map_err(GenerationError::Staging)
                .with_context(|| format!("Failed to stage {}", source.display()))?;
        }
        on_event(Event::Staged {
            count: staging.glyphs().len(),
        });

        on_event(Event::Generating);
        let job = GenerationJob {
            staging_dir: staging.path(),
            font: &self.config.font,
            start: self.config.base_codepoint,
            resolver: CodepointResolver::new(report.record()),
            glyphs: staging.glyphs().to_vec(),
        };
        let generated = generator.generate(&job);
        drop(job);

        if let Err(e) = staging.close() {
            warn!("Failed to remove staging directory: {}", e);
        }

        generated.context("Font generation failed")?;
        info!("Font generation finished");
        on_event(Event::Generated);

        Ok(report)
    }
}
