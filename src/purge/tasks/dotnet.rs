//! .NET cleanup task.

use crate::purge::{CleanupAction, EcosystemTask};

/// Cleanup task for .NET projects.
///
/// Identifies projects by `*.csproj` or `*.sln` files and runs
/// `dotnet clean --nologo`. Many projects on disk are not compatible
/// with the installed dotnet-core toolchain, so a failing clean is
/// expected and tolerated.
pub struct DotnetTask;

impl EcosystemTask for DotnetTask {
    fn id(&self) -> &'static str {
        "dotnet"
    }

    fn display_name(&self) -> &'static str {
        ".NET"
    }

    fn tool(&self) -> &'static str {
        "dotnet"
    }

    fn manifest_files(&self) -> &'static [&'static str] {
        &[] // Uses custom suffix matching
    }

    fn action(&self) -> CleanupAction {
        CleanupAction::RunTool {
            args: &["clean", "--nologo"],
            tolerate_failure: true,
        }
    }

    /// Case-insensitive suffix match on `.csproj` and `.sln`.
    fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_ascii_lowercase();
        lower.ends_with(".csproj") || lower.ends_with(".sln")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotnet_task_properties() {
        let task = DotnetTask;

        assert_eq!(task.id(), "dotnet");
        assert_eq!(task.display_name(), ".NET");
        assert_eq!(task.tool(), "dotnet");
        assert!(task.manifest_files().is_empty());
        assert_eq!(
            task.action(),
            CleanupAction::RunTool {
                args: &["clean", "--nologo"],
                tolerate_failure: true,
            }
        );
    }

    #[test]
    fn test_dotnet_matches_csproj() {
        assert!(DotnetTask.matches("MyApp.csproj"));
        assert!(DotnetTask.matches("myapp.CSPROJ"));
    }

    #[test]
    fn test_dotnet_matches_sln() {
        assert!(DotnetTask.matches("MyApp.sln"));
        assert!(DotnetTask.matches("solution.SLN"));
    }

    #[test]
    fn test_dotnet_rejects_other_files() {
        assert!(!DotnetTask.matches("readme.md"));
        assert!(!DotnetTask.matches("csproj"));
        assert!(!DotnetTask.matches("app.csproj.bak"));
    }
}
