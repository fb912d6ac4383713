//! Executor for ecosystem cleanup actions.

use crate::error::{PurgeError, Result};
use crate::purge::runner::CommandRunner;
use crate::purge::task::{CleanupAction, EcosystemTask};
use humansize::{format_size, BINARY};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

enum Mode {
    /// Perform removals and invoke external tools.
    Real(Box<dyn CommandRunner>),
    /// Perform nothing; matching and reporting are unaffected.
    DryRun,
}

/// Carries the run mode and performs a task's action for a matched
/// manifest.
///
/// The mode is fixed at construction: callers pick the real or the
/// dry-run executor up front instead of swapping actions later.
pub struct TaskExecutor {
    mode: Mode,
}

impl TaskExecutor {
    /// Create an executor that really cleans, using the given runner
    /// for external tool invocations.
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            mode: Mode::Real(runner),
        }
    }

    /// Create an executor whose actions are all no-ops.
    pub fn dry_run() -> Self {
        Self { mode: Mode::DryRun }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self.mode, Mode::DryRun)
    }

    /// Perform the task's cleanup for a matched manifest file.
    ///
    /// `manifest` is the full path of the matched file; the action is
    /// applied relative to its directory.
    pub fn run(&self, task: &dyn EcosystemTask, manifest: &Path) -> Result<()> {
        let runner = match &self.mode {
            Mode::DryRun => return Ok(()),
            Mode::Real(runner) => runner,
        };

        let dir = manifest.parent().unwrap_or(Path::new("."));

        match task.action() {
            CleanupAction::RemoveDir(name) => {
                let target = dir.join(name);
                let size = dir_size(&target);
                match fs::remove_dir_all(&target) {
                    Ok(()) => {
                        tracing::info!(
                            task = task.id(),
                            path = %target.display(),
                            size = %format_size(size, BINARY),
                            "removed dependency cache"
                        );
                    }
                    // Nothing to remove is not a failure.
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        tracing::debug!(path = %target.display(), "cache directory already absent");
                    }
                    Err(source) => {
                        return Err(PurgeError::RemoveDir {
                            path: target,
                            source,
                        })
                    }
                }
            }
            CleanupAction::RunTool {
                args,
                tolerate_failure,
            } => {
                let output = runner.run(task.tool(), args, Some(dir)).map_err(|e| {
                    PurgeError::CleanCommand {
                        program: task.tool().to_string(),
                        dir: dir.to_path_buf(),
                        detail: e.to_string(),
                    }
                })?;

                if !output.success {
                    if tolerate_failure {
                        tracing::warn!(
                            task = task.id(),
                            dir = %dir.display(),
                            stderr = output.stderr.trim(),
                            "clean command failed, continuing"
                        );
                    } else {
                        return Err(PurgeError::CleanCommand {
                            program: task.tool().to_string(),
                            dir: dir.to_path_buf(),
                            detail: output.stderr.trim().to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
