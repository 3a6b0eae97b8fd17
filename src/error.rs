//! Crate error types.

use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Startup and delivery errors.
///
/// Report collection itself never fails; anything that can go wrong does
/// so before collection (configuration, snapshot loading) or after it
/// (writing the output, binding the serve address).
#[derive(Debug)]
pub enum Error {
    /// Invalid configuration.
    Config(ConfigError),

    /// Snapshot file could not be read.
    SnapshotRead {
        path: PathBuf,
        error: std::io::Error,
    },

    /// Snapshot file is not valid JSON.
    SnapshotParse {
        path: PathBuf,
        error: serde_json::Error,
    },

    /// Rendered report could not be written.
    OutputWrite {
        path: PathBuf,
        error: std::io::Error,
    },

    /// I/O error outside the paths above (serve-mode bind/accept).
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "configuration error: {}", e),
            Error::SnapshotRead { path, error } => {
                write!(f, "cannot read snapshot {}: {}", path.display(), error)
            }
            Error::SnapshotParse { path, error } => {
                write!(f, "cannot parse snapshot {}: {}", path.display(), error)
            }
            Error::OutputWrite { path, error } => {
                write!(f, "cannot write report {}: {}", path.display(), error)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::SnapshotRead { error, .. } => Some(error),
            Error::SnapshotParse { error, .. } => Some(error),
            Error::OutputWrite { error, .. } => Some(error),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
