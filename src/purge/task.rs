//! Core trait and types for ecosystem cleanup tasks.

/// How a task cleans up the directory of a matched manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupAction {
    /// Recursively delete the named directory next to the manifest.
    /// A missing target is not an error.
    RemoveDir(&'static str),
    /// Run the ecosystem tool with these arguments, working directory
    /// set to the manifest's directory.
    RunTool {
        args: &'static [&'static str],
        /// Non-zero exit is logged as a warning instead of failing the run.
        tolerate_failure: bool,
    },
}

/// Trait for ecosystem cleanup tasks.
///
/// Implement this trait to add cleanup support for a new ecosystem.
/// A task is responsible for:
/// - Recognizing the manifest file that marks a project root
/// - Naming the external tool it depends on
/// - Describing how the dependency cache is removed
pub trait EcosystemTask: Send + Sync {
    /// Unique identifier for this ecosystem (e.g. "npm").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g. "npm/Node.js").
    fn display_name(&self) -> &'static str;

    /// Executable that must resolve on PATH for this task to be usable.
    fn tool(&self) -> &'static str;

    /// Manifest file names that signal this ecosystem.
    fn manifest_files(&self) -> &'static [&'static str];

    /// Cleanup to perform for a matched manifest.
    fn action(&self) -> CleanupAction;

    /// Check whether a file name signals this ecosystem.
    ///
    /// Default implementation is an exact match against `manifest_files`.
    fn matches(&self, file_name: &str) -> bool {
        self.manifest_files().iter().any(|m| *m == file_name)
    }
}
