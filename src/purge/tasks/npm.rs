//! npm/Node.js cleanup task.

use crate::purge::{CleanupAction, EcosystemTask};

/// Cleanup task for npm/Node.js projects.
///
/// Identifies projects by the presence of `package.json` and removes
/// the `node_modules/` directory directly (no native clean command).
pub struct NpmTask;

impl EcosystemTask for NpmTask {
    fn id(&self) -> &'static str {
        "npm"
    }

    fn display_name(&self) -> &'static str {
        "npm/Node.js"
    }

    fn tool(&self) -> &'static str {
        "npm"
    }

    fn manifest_files(&self) -> &'static [&'static str] {
        &["package.json"]
    }

    fn action(&self) -> CleanupAction {
        CleanupAction::RemoveDir("node_modules")
    }
}
