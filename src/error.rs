use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum PurgeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid root path '{path}': {source}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No ecosystem tools available on PATH, nothing to do")]
    NoTasksAvailable,

    #[error("Failed to read directory contents of '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove directory '{path}': {source}")]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Clean command '{program}' failed in '{dir}': {detail}")]
    CleanCommand {
        program: String,
        dir: PathBuf,
        detail: String,
    },

    #[error("Cache clear command '{command}' failed: {detail}")]
    CacheClear { command: String, detail: String },

    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl PurgeError {
    /// Process exit code for this error: 2 for usage/configuration
    /// problems, 1 for execution failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidPath { .. } | Self::NoTasksAvailable => 2,
            _ => 1,
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PurgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = PurgeError::ReadDir {
            path: PathBuf::from("/srv/projects"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/srv/projects"));
    }

    #[test]
    fn config_errors_exit_with_usage_code() {
        assert_eq!(PurgeError::NoTasksAvailable.exit_code(), 2);

        let invalid = PurgeError::InvalidPath {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(invalid.exit_code(), 2);
    }

    #[test]
    fn execution_errors_exit_with_error_code() {
        let err = PurgeError::CacheClear {
            command: "go clean -cache".into(),
            detail: "boom".into(),
        };
        assert_eq!(err.exit_code(), 1);

        let err = PurgeError::RemoveDir {
            path: PathBuf::from("/a/node_modules"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::ReadError {
            path: PathBuf::from("/etc/purge.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let err: PurgeError = config_err.into();
        assert!(matches!(err, PurgeError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
