//! External process invocation.

use std::io;
use std::path::Path;
use std::process::Command;

/// Outcome of an external command, with captured diagnostics.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stderr: String,
}

/// Invokes external commands with an optional working directory.
///
/// The working directory applies to the subprocess only; the calling
/// process never changes its own.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<CommandOutput>;
}

/// Runner backed by `std::process::Command`.
///
/// Fully synchronous and without a timeout: a hung tool blocks the run.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<CommandOutput> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
