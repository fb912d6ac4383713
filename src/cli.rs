use clap::Parser;
use std::path::PathBuf;

/// purge-deps - Remove dependency caches beneath a directory tree
///
/// Walks the tree under PATH looking for ecosystem manifests
/// (composer.json, package.json, Cargo.toml, *.csproj/*.sln) and
/// removes the matching dependency cache, either directly or via the
/// ecosystem's own clean command. Prints one line per processed
/// manifest.
#[derive(Parser, Debug)]
#[command(name = "purge-deps")]
#[command(author, version, about)]
pub struct Cli {
    /// Root directory to walk
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print matched manifests without removing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip the global cache clears after the traversal
    #[arg(long)]
    pub skip_cache_clear: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
