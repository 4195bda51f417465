//! Plan materialization and artifact removal.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::ports::output::Filesystem;
use crate::application::services::renderer::StubRenderer;
use crate::domain::entities::common::RelativePath;
use crate::domain::entities::context::StubContext;
use crate::domain::entities::plan::ScaffoldPlan;
use crate::domain::value_objects::OverwritePolicy;

// ── Outcomes ─────────────────────────────────────────────────────────────────

/// What happened to one planned artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactOutcome {
    Created,
    Skipped { reason: String },
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct SynthesisRecord {
    pub dest: RelativePath,
    pub outcome: ArtifactOutcome,
}

/// Per-entry results of one materialization run.
///
/// A failed entry never aborts the run; callers inspect the report to
/// decide what to tell the user.
#[derive(Debug, Clone, Default)]
pub struct SynthesisReport {
    records: Vec<SynthesisRecord>,
}

impl SynthesisReport {
    pub fn records(&self) -> &[SynthesisRecord] {
        &self.records
    }

    pub fn created(&self) -> impl Iterator<Item = &SynthesisRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, ArtifactOutcome::Created))
    }

    pub fn created_count(&self) -> usize {
        self.created().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, ArtifactOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &SynthesisRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, ArtifactOutcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }

    fn push(&mut self, dest: RelativePath, outcome: ArtifactOutcome) {
        self.records.push(SynthesisRecord { dest, outcome });
    }
}

/// What happened to one removal target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    Missing,
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct RemovalRecord {
    pub target: RelativePath,
    pub outcome: RemovalOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct RemovalReport {
    records: Vec<RemovalRecord>,
}

impl RemovalReport {
    pub fn records(&self) -> &[RemovalRecord] {
        &self.records
    }

    pub fn removed(&self) -> impl Iterator<Item = &RemovalRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, RemovalOutcome::Removed))
    }

    pub fn removed_count(&self) -> usize {
        self.removed().count()
    }

    pub fn has_failures(&self) -> bool {
        self.records
            .iter()
            .any(|r| matches!(r.outcome, RemovalOutcome::Failed { .. }))
    }

    fn push(&mut self, target: RelativePath, outcome: RemovalOutcome) {
        self.records.push(RemovalRecord { target, outcome });
    }
}

// ── Synthesizer ──────────────────────────────────────────────────────────────

/// Turns plans into files and removes artifacts again.
pub struct FileSynthesizer {
    filesystem: Arc<dyn Filesystem>,
}

impl FileSynthesizer {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materializes `plan` under `root`.
    ///
    /// Directories first, then files in plan order. Existing files are
    /// skipped under [`OverwritePolicy::Reject`]. Failures are recorded
    /// per entry and the run continues.
    #[instrument(skip_all, fields(root = %root.display(), entries = plan.len()))]
    pub fn materialize(
        &self,
        root: &Path,
        plan: &ScaffoldPlan,
        renderer: &StubRenderer,
        context: &StubContext,
        policy: OverwritePolicy,
    ) -> SynthesisReport {
        let mut report = SynthesisReport::default();

        for folder in plan.folders() {
            let target = root.join(folder.as_path());
            if let Err(e) = self.filesystem.create_dir_all(&target) {
                warn!(folder = %folder, error = %e, "directory creation failed");
                report.push(
                    folder.clone(),
                    ArtifactOutcome::Failed {
                        reason: e.to_string(),
                    },
                );
            }
        }

        for entry in plan.entries() {
            let target = root.join(entry.dest.as_path());

            if self.filesystem.exists(&target) && policy == OverwritePolicy::Reject {
                debug!(dest = %entry.dest, "destination exists, skipping");
                report.push(
                    entry.dest.clone(),
                    ArtifactOutcome::Skipped {
                        reason: "already exists".to_string(),
                    },
                );
                continue;
            }

            let content = match renderer.render(entry.stub, context) {
                Ok(content) => content,
                Err(e) => {
                    warn!(stub = %entry.stub, error = %e, "stub rendering failed");
                    report.push(
                        entry.dest.clone(),
                        ArtifactOutcome::Failed {
                            reason: e.to_string(),
                        },
                    );
                    continue;
                }
            };

            let write_result = target
                .parent()
                .map(|parent| self.filesystem.create_dir_all(parent))
                .unwrap_or(Ok(()))
                .and_then(|()| self.filesystem.write_file(&target, &content));

            match write_result {
                Ok(()) => {
                    debug!(dest = %entry.dest, "artifact written");
                    report.push(entry.dest.clone(), ArtifactOutcome::Created);
                }
                Err(e) => {
                    warn!(dest = %entry.dest, error = %e, "write failed");
                    report.push(
                        entry.dest.clone(),
                        ArtifactOutcome::Failed {
                            reason: e.to_string(),
                        },
                    );
                }
            }
        }

        report
    }

    /// Removes `targets` under `root`; directories recursively, files
    /// singly. Missing targets are recorded, not errors.
    #[instrument(skip_all, fields(root = %root.display(), targets = targets.len()))]
    pub fn remove(&self, root: &Path, targets: &[RelativePath]) -> RemovalReport {
        let mut report = RemovalReport::default();

        for target in targets {
            let path = root.join(target.as_path());
            if !self.filesystem.exists(&path) {
                report.push(target.clone(), RemovalOutcome::Missing);
                continue;
            }
            let result = if self.filesystem.is_dir(&path) {
                self.filesystem.remove_dir_all(&path)
            } else {
                self.filesystem.remove_file(&path)
            };
            match result {
                Ok(()) => {
                    debug!(target = %target, "artifact removed");
                    report.push(target.clone(), RemovalOutcome::Removed);
                }
                Err(e) => {
                    warn!(target = %target, error = %e, "removal failed");
                    report.push(
                        target.clone(),
                        RemovalOutcome::Failed {
                            reason: e.to_string(),
                        },
                    );
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::application::ports::output::MockFilesystem;
    use crate::domain::entities::name::NameVariantSet;
    use crate::domain::value_objects::{CapabilitySet, ModuleKind};
    use crate::testing::{MemoryFs, TestStubs};
    use std::path::PathBuf;

    fn fixtures() -> (NameVariantSet, ScaffoldPlan, StubContext) {
        let names = NameVariantSet::derive("Blog").unwrap();
        let plan = ScaffoldPlan::for_module(
            &names,
            ModuleKind::Plain,
            &CapabilitySet::empty(),
            "2024_01_01_000000",
        )
        .unwrap();
        let context = StubContext::for_module(&names);
        (names, plan, context)
    }

    #[test]
    fn materializes_full_module_plan() {
        let fs = MemoryFs::new();
        let synth = FileSynthesizer::new(Arc::new(fs.clone()));
        let renderer = StubRenderer::new(Arc::new(TestStubs::new()));
        let (_names, plan, context) = fixtures();

        let report = synth.materialize(
            Path::new("modules/Blog"),
            &plan,
            &renderer,
            &context,
            OverwritePolicy::Reject,
        );

        assert_eq!(report.created_count(), plan.len());
        assert!(!report.has_failures());
        assert!(fs.read("modules/Blog/Models/Blog.php").is_some());
        assert!(fs.read("modules/Blog/Routes/web.php").is_some());
        assert!(fs.is_dir(Path::new("modules/Blog/Providers")));
    }

    #[test]
    fn reject_policy_skips_existing_files() {
        let fs = MemoryFs::new();
        fs.insert_file("modules/Blog/Models/Blog.php", "original");
        let synth = FileSynthesizer::new(Arc::new(fs.clone()));
        let renderer = StubRenderer::new(Arc::new(TestStubs::new()));
        let (_names, plan, context) = fixtures();

        let report = synth.materialize(
            Path::new("modules/Blog"),
            &plan,
            &renderer,
            &context,
            OverwritePolicy::Reject,
        );

        assert_eq!(report.skipped_count(), 1);
        assert_eq!(fs.read("modules/Blog/Models/Blog.php").unwrap(), "original");
    }

    #[test]
    fn replace_policy_overwrites() {
        let fs = MemoryFs::new();
        fs.insert_file("modules/Blog/Models/Blog.php", "original");
        let synth = FileSynthesizer::new(Arc::new(fs.clone()));
        let renderer = StubRenderer::new(Arc::new(TestStubs::new()));
        let (_names, plan, context) = fixtures();

        let report = synth.materialize(
            Path::new("modules/Blog"),
            &plan,
            &renderer,
            &context,
            OverwritePolicy::Replace,
        );

        assert_eq!(report.skipped_count(), 0);
        assert!(report.created_count() > 0);
        assert_ne!(fs.read("modules/Blog/Models/Blog.php").unwrap(), "original");
    }

    #[test]
    fn missing_stub_records_failure_and_continues() {
        use crate::domain::stubs::StubId;

        let fs = MemoryFs::new();
        let synth = FileSynthesizer::new(Arc::new(fs.clone()));
        let renderer = StubRenderer::new(Arc::new(TestStubs::new().without(StubId::Model)));
        let (_names, plan, context) = fixtures();

        let report = synth.materialize(
            Path::new("modules/Blog"),
            &plan,
            &renderer,
            &context,
            OverwritePolicy::Reject,
        );

        assert!(report.has_failures());
        assert_eq!(report.failed().count(), 1);
        // everything after the failed entry was still written
        assert_eq!(report.created_count(), plan.len() - 1);
        assert!(fs.read("modules/Blog/Routes/web.php").is_some());
    }

    #[test]
    fn write_failure_is_recorded_per_entry() {
        let mut mock = MockFilesystem::new();
        mock.expect_create_dir_all().returning(|_| Ok(()));
        mock.expect_exists().return_const(false);
        mock.expect_write_file().returning(|path, _| {
            if path.ends_with("Models/Blog.php") {
                Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "disk full".to_string(),
                })
            } else {
                Ok(())
            }
        });

        let synth = FileSynthesizer::new(Arc::new(mock));
        let renderer = StubRenderer::new(Arc::new(TestStubs::new()));
        let (_names, plan, context) = fixtures();

        let report = synth.materialize(
            Path::new("modules/Blog"),
            &plan,
            &renderer,
            &context,
            OverwritePolicy::Reject,
        );

        assert_eq!(report.failed().count(), 1);
        assert_eq!(report.created_count(), plan.len() - 1);
    }

    #[test]
    fn remove_handles_files_dirs_and_missing() {
        let fs = MemoryFs::new();
        fs.insert_file("modules/Blog/Models/Post.php", "x");
        fs.insert_file("modules/Blog/Views/posts/index.blade.php", "x");
        let synth = FileSynthesizer::new(Arc::new(fs.clone()));

        let targets = vec![
            RelativePath::new("Models/Post.php"),
            RelativePath::new("Views/posts"),
            RelativePath::new("Services/PostService.php"),
        ];
        let report = synth.remove(Path::new("modules/Blog"), &targets);

        assert_eq!(report.removed_count(), 2);
        assert!(!report.has_failures());
        assert!(fs.read("modules/Blog/Models/Post.php").is_none());
        assert!(fs.read("modules/Blog/Views/posts/index.blade.php").is_none());
        let missing: Vec<_> = report
            .records()
            .iter()
            .filter(|r| r.outcome == RemovalOutcome::Missing)
            .collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].target.to_string(), "Services/PostService.php");
    }

    #[test]
    fn mock_filesystem_dir_failure_is_recorded() {
        let mut mock = MockFilesystem::new();
        mock.expect_create_dir_all().returning(|path: &Path| {
            Err(ApplicationError::Filesystem {
                path: PathBuf::from(path),
                reason: "read-only".to_string(),
            })
        });
        mock.expect_exists().return_const(false);
        mock.expect_write_file().returning(|_, _| Ok(()));

        let synth = FileSynthesizer::new(Arc::new(mock));
        let renderer = StubRenderer::new(Arc::new(TestStubs::new()));
        let (_names, plan, context) = fixtures();

        let report = synth.materialize(
            Path::new("modules/Blog"),
            &plan,
            &renderer,
            &context,
            OverwritePolicy::Reject,
        );

        // every folder failed, and every file failed on its parent dir
        assert!(report.has_failures());
        assert_eq!(report.created_count(), 0);
    }
}
