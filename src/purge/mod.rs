//! Dependency-cache detection and removal.
//!
//! This module provides:
//! - The ecosystem task catalog (Composer, npm, Cargo, .NET)
//! - Tool availability probing and the filtered task registry
//! - The traversal engine that matches manifests and fires tasks
//! - Global cache clearing after a successful pass

mod task;
pub mod tasks;

pub mod cache;
pub mod executor;
pub mod probe;
pub mod registry;
pub mod runner;
pub mod walker;

pub use executor::TaskExecutor;
pub use probe::{PathProbe, ToolProbe};
pub use registry::TaskRegistry;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use task::{CleanupAction, EcosystemTask};
pub use tasks::all_tasks;
pub use walker::Walker;
