//! Built-in ecosystem cleanup tasks.

mod cargo;
mod composer;
mod dotnet;
mod npm;

pub use cargo::CargoTask;
pub use composer::ComposerTask;
pub use dotnet::DotnetTask;
pub use npm::NpmTask;

use crate::purge::EcosystemTask;

/// Returns the full task catalog in priority order.
///
/// Order matters: the first task whose manifest predicate matches a
/// file in a directory wins, and no later task is consulted there.
pub fn all_tasks() -> Vec<Box<dyn EcosystemTask>> {
    vec![
        Box::new(ComposerTask),
        Box::new(NpmTask),
        Box::new(CargoTask),
        Box::new(DotnetTask),
    ]
}
