//! Global cache clearing after a successful traversal.

use crate::error::{PurgeError, Result};
use crate::purge::runner::CommandRunner;

/// Global cache clears, run in this order after a non-dry pass.
///
/// These run unconditionally: they are not gated by tool availability
/// or by whether any task fired during the traversal.
const GLOBAL_CACHE_CLEARS: &[(&str, &[&str])] = &[
    ("go", &["clean", "-cache"]),
    ("go", &["clean", "-modcache"]),
    ("go", &["clean", "-testcache"]),
    ("npm", &["cache", "clean", "--force"]),
    ("composer", &["clear-cache"]),
];

/// Clear the global per-ecosystem caches, sequentially and fail-fast.
///
/// The first failure aborts the remaining clears with an error naming
/// the offending command.
pub fn clear_global_caches(runner: &dyn CommandRunner) -> Result<()> {
    for (program, args) in GLOBAL_CACHE_CLEARS {
        let command = format!("{} {}", program, args.join(" "));
        tracing::debug!(%command, "clearing global cache");

        let output = runner
            .run(program, args, None)
            .map_err(|e| PurgeError::CacheClear {
                command: command.clone(),
                detail: e.to_string(),
            })?;

        if !output.success {
            return Err(PurgeError::CacheClear {
                command,
                detail: output.stderr.trim().to_string(),
            });
        }
    }

    Ok(())
}
