//! Command handlers.
//!
//! Each submodule owns one subcommand: translate arguments, wire the
//! adapters, call the core services, display results. No business logic
//! lives here.

pub mod cache;
pub mod completions;
pub mod config;
pub mod entity;
pub mod module;

use std::path::Path;
use std::sync::Arc;

use modgen_adapters::{
    BuiltinStubs, JsonFileStore, LocalFilesystem, OverlayStubSource, PresetPrompt,
};
use modgen_core::application::{
    ArtifactOutcome, CacheService, SynthesisReport,
    ports::{ConfirmationPrompt, Filesystem, KeyValueStore, StubSource},
};

use crate::{config::AppConfig, error::CliResult, output::OutputManager, prompt::StdinPrompt};

// ── Adapter wiring shared by the lifecycle commands ──────────────────────────

pub(crate) fn filesystem() -> Arc<dyn Filesystem> {
    Arc::new(LocalFilesystem::new())
}

pub(crate) fn stub_source(config: &AppConfig) -> Arc<dyn StubSource> {
    match &config.stubs_dir {
        Some(dir) => Arc::new(OverlayStubSource::new(dir.clone())),
        None => Arc::new(BuiltinStubs::new()),
    }
}

pub(crate) fn confirmation(assume_yes: bool) -> Arc<dyn ConfirmationPrompt> {
    if assume_yes {
        Arc::new(PresetPrompt::assume_yes())
    } else {
        Arc::new(StdinPrompt::new())
    }
}

pub(crate) fn cache_service(
    config: &AppConfig,
    root: &Path,
    filesystem: Arc<dyn Filesystem>,
) -> CacheService {
    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(config.cache_file_for(root)));
    CacheService::new(filesystem, store)
}

/// Refresh the cache after a mutation. Store trouble degrades to a
/// warning; the scaffold already happened and must not be reported as
/// failed.
pub(crate) fn refresh_cache(
    cache: &CacheService,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if let Err(e) = cache.rebuild(root) {
        output.warning(&format!("Cache refresh failed: {e}"))?;
    }
    Ok(())
}

/// One line per planned artifact. Failures are warnings, not errors;
/// the files that did land are already on disk.
pub(crate) fn report_synthesis(report: &SynthesisReport, output: &OutputManager) -> CliResult<()> {
    for record in report.records() {
        match &record.outcome {
            ArtifactOutcome::Created => output.print(&format!("  + {}", record.dest))?,
            ArtifactOutcome::Skipped { reason } => {
                output.info(&format!("skipped {}: {reason}", record.dest))?;
            }
            ArtifactOutcome::Failed { reason } => {
                output.warning(&format!("could not write {}: {reason}", record.dest))?;
            }
        }
    }
    Ok(())
}
