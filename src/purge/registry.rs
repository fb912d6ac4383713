//! Task registry holding the actionable subset of the catalog.

use crate::error::{PurgeError, Result};
use crate::purge::probe::ToolProbe;
use crate::purge::tasks::all_tasks;
use crate::purge::EcosystemTask;

/// Ordered collection of ecosystem tasks whose tools are present.
///
/// Built once at startup from the fixed catalog, filtered by tool
/// availability, and read-only thereafter.
pub struct TaskRegistry {
    tasks: Vec<Box<dyn EcosystemTask>>,
}

impl TaskRegistry {
    /// Build the registry from the catalog.
    ///
    /// Each entry's availability is checked exactly once; unavailable
    /// entries are dropped, as are entries disabled by configuration.
    /// Catalog order is preserved. An empty result is a configuration
    /// error since there is nothing useful to do.
    pub fn detect(probe: &dyn ToolProbe, disabled: &[String]) -> Result<Self> {
        let tasks: Vec<Box<dyn EcosystemTask>> = all_tasks()
            .into_iter()
            .filter(|task| {
                if disabled.iter().any(|id| id == task.id()) {
                    tracing::debug!(task = task.id(), "disabled by configuration");
                    return false;
                }
                true
            })
            .filter(|task| {
                let available = probe.is_available(task.tool());
                if !available {
                    tracing::debug!(
                        task = task.id(),
                        tool = task.tool(),
                        "tool not on PATH, skipping ecosystem"
                    );
                }
                available
            })
            .collect();

        if tasks.is_empty() {
            return Err(PurgeError::NoTasksAvailable);
        }

        Ok(Self { tasks })
    }

    /// Get all registered tasks, in priority order.
    pub fn tasks(&self) -> &[Box<dyn EcosystemTask>] {
        &self.tasks
    }

    /// List all registered task IDs.
    pub fn ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.id()).collect()
    }

    /// Get the number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
