//! Error handling for grid conversion.
//!
//! Fatal conditions abort a conversion before any output file is created.
//! Recoverable problems (an optional field that does not parse) are logged
//! with `tracing::warn!` at the point of detection instead.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {context}: {reason}")]
    MalformedRecord { context: String, reason: String },

    #[error("Inconsistent geometry: {reason}")]
    InconsistentGeometry { reason: String },

    #[error("Missing resource: {path}")]
    MissingResource { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GridError {
    /// Create an I/O error tied to the offending path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Create an inconsistent geometry error
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InconsistentGeometry {
            reason: reason.into(),
        }
    }

    /// Create a missing resource error
    pub fn missing_resource(path: impl AsRef<Path>) -> Self {
        Self::MissingResource {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = GridError::io(
            "/tmp/blade.bem",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/blade.bem"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_malformed_record_message() {
        let err = GridError::malformed("station 3", "missing Chord");
        assert_eq!(
            err.to_string(),
            "Malformed record in station 3: missing Chord"
        );
    }
}
