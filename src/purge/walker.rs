//! Breadth-first traversal and manifest matching.

use crate::error::{PurgeError, Result};
use crate::purge::executor::TaskExecutor;
use crate::purge::registry::TaskRegistry;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Walks a directory tree, firing at most one cleanup task per
/// directory.
///
/// Files are checked before any descent; a match short-circuits the
/// rest of the directory, including its subdirectories, since the tree
/// below is about to be (or has just been) cleaned. Symbolic links,
/// devices and pipes are never matched and never descended into, so
/// the traversal is acyclic by construction. There is no depth guard:
/// pathologically deep trees can exhaust the call stack.
pub struct Walker<'a> {
    registry: &'a TaskRegistry,
    executor: &'a TaskExecutor,
}

impl<'a> Walker<'a> {
    pub fn new(registry: &'a TaskRegistry, executor: &'a TaskExecutor) -> Self {
        Self { registry, executor }
    }

    /// Walk the tree rooted at `path`, writing one line per matched
    /// manifest to `out`.
    ///
    /// A directory that cannot be listed aborts the whole traversal;
    /// so does the first failing action or failing child, with no
    /// continuation into sibling directories.
    pub fn walk(&self, path: &Path, out: &mut dyn Write) -> Result<()> {
        let (files, dirs) = self.list_entries(path)?;

        // First pass: files, in registry priority order. First match
        // wins and ends this directory entirely.
        for task in self.registry.tasks() {
            let matched = files
                .iter()
                .find(|name| task.matches(&name.to_string_lossy()));

            if let Some(name) = matched {
                let manifest = path.join(name);
                tracing::debug!(task = task.id(), manifest = %manifest.display(), "matched");

                // The only stdout output of this program is the full
                // path of each processed manifest.
                writeln!(out, "{}", manifest.display())
                    .map_err(|source| PurgeError::Output { source })?;

                // Action errors are already contextualized at the source.
                return self.executor.run(task.as_ref(), &manifest);
            }
        }

        // Second pass: no match here, descend into subdirectories.
        for dir in dirs {
            self.walk(&dir, out)?;
        }

        Ok(())
    }

    /// Partition a directory into plain files and real subdirectories.
    ///
    /// `DirEntry::file_type` does not follow symlinks, which excludes
    /// links, devices and pipes from both sets.
    fn list_entries(&self, path: &Path) -> Result<(Vec<OsString>, Vec<PathBuf>)> {
        let read_dir = fs::read_dir(path).map_err(|source| PurgeError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in read_dir {
            let entry = entry.map_err(|source| PurgeError::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| PurgeError::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;

            if file_type.is_file() {
                files.push(entry.file_name());
            } else if file_type.is_dir() {
                dirs.push(entry.path());
            }
        }

        // Deterministic order regardless of filesystem enumeration.
        files.sort();
        dirs.sort();

        Ok((files, dirs))
    }
}
