//! Cargo/Rust cleanup task.

use crate::purge::{CleanupAction, EcosystemTask};

/// Cleanup task for Rust/Cargo projects.
///
/// Identifies projects by the presence of `Cargo.toml` (either casing)
/// and cleans the `target/` directory with `cargo clean`.
pub struct CargoTask;

impl EcosystemTask for CargoTask {
    fn id(&self) -> &'static str {
        "cargo"
    }

    fn display_name(&self) -> &'static str {
        "Rust/Cargo"
    }

    fn tool(&self) -> &'static str {
        "cargo"
    }

    fn manifest_files(&self) -> &'static [&'static str] {
        &["Cargo.toml", "cargo.toml"]
    }

    fn action(&self) -> CleanupAction {
        CleanupAction::RunTool {
            args: &["clean"],
            tolerate_failure: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_task_properties() {
        let task = CargoTask;

        assert_eq!(task.id(), "cargo");
        assert_eq!(task.display_name(), "Rust/Cargo");
        assert_eq!(task.tool(), "cargo");
        assert_eq!(task.manifest_files(), &["Cargo.toml", "cargo.toml"]);
        assert_eq!(
            task.action(),
            CleanupAction::RunTool {
                args: &["clean"],
                tolerate_failure: false,
            }
        );
    }

    #[test]
    fn test_cargo_matches_both_casings() {
        assert!(CargoTask.matches("Cargo.toml"));
        assert!(CargoTask.matches("cargo.toml"));
        assert!(!CargoTask.matches("CARGO.TOML"));
        assert!(!CargoTask.matches("Cargo.lock"));
    }
}
