//! purge-deps - Remove dependency caches beneath a directory tree
//!
//! This crate provides functionality for:
//! - Detecting project manifests for supported ecosystems
//! - Removing dependency caches directly or via native clean commands
//! - Clearing global per-ecosystem caches after a pass

pub mod cli;
pub mod config;
pub mod error;
pub mod purge;

// Re-export commonly used types
pub use config::Config;
pub use error::{PurgeError, Result};
