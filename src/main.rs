use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use purge_deps::cli::Cli;
use purge_deps::config::Config;
use purge_deps::error::{PurgeError, Result};
use purge_deps::purge::{
    cache, PathProbe, SystemRunner, TaskExecutor, TaskRegistry, Walker,
};

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(&cli) {
        eprintln!("purge-deps: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Loaded configuration");

    let root = resolve_root(&cli.path)?;
    tracing::info!(root = %root.display(), dry_run = cli.dry_run, "Starting purge");

    let registry = TaskRegistry::detect(&PathProbe, &config.purge.disabled_ecosystems)?;
    tracing::debug!(tasks = ?registry.ids(), "Registered ecosystem tasks");

    let executor = if cli.dry_run {
        TaskExecutor::dry_run()
    } else {
        TaskExecutor::new(Box::new(SystemRunner))
    };

    let walker = Walker::new(&registry, &executor);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    walker.walk(&root, &mut out)?;
    out.flush()
        .map_err(|source| PurgeError::Output { source })?;

    // Global caches are only touched by a real pass.
    if !cli.dry_run && !cli.skip_cache_clear && config.purge.clear_global_caches {
        cache::clear_global_caches(&SystemRunner)?;
    }

    Ok(())
}

/// Resolve the root argument to an absolute, cleaned path.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|source| PurgeError::InvalidPath {
        path: path.to_path_buf(),
        source,
    })
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("purge_deps={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
