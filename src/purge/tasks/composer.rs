//! Composer/PHP cleanup task.

use crate::purge::{CleanupAction, EcosystemTask};

/// Cleanup task for Composer/PHP projects.
///
/// Identifies projects by the presence of `composer.json` and removes
/// the `vendor/` directory directly.
pub struct ComposerTask;

impl EcosystemTask for ComposerTask {
    fn id(&self) -> &'static str {
        "composer"
    }

    fn display_name(&self) -> &'static str {
        "Composer/PHP"
    }

    fn tool(&self) -> &'static str {
        "composer"
    }

    fn manifest_files(&self) -> &'static [&'static str] {
        &["composer.json"]
    }

    fn action(&self) -> CleanupAction {
        CleanupAction::RemoveDir("vendor")
    }
}
