//! Error types for labelcache
//!
//! All modules use `LabelCacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for labelcache operations
pub type LabelCacheResult<T> = Result<T, LabelCacheError>;

/// All errors that can occur in labelcache
#[derive(Error, Debug)]
pub enum LabelCacheError {
    // Cache directory errors
    #[error("Failed to create cache directory {path}: {source}")]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot determine image id from {file}: {reason}")]
    IdentityParse { file: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl LabelCacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CacheDirCreate { .. } => {
                Some("Check the cache root, or pass a writable directory with --root")
            }
            Self::IdentityParse { .. } => Some(
                "Rename or remove the file so it follows <name>-<id>.png or <name>-<id>-Page<n>.png",
            ),
            Self::ConfigInvalid { .. } => Some("Run: labelcache config init --force"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LabelCacheError::IdentityParse {
            file: "ship-abc.png".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("ship-abc.png"));
    }

    #[test]
    fn error_hint() {
        let err = LabelCacheError::CacheDirCreate {
            path: PathBuf::from("/nope"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.hint().unwrap().contains("--root"));
        assert!(LabelCacheError::User("x".into()).hint().is_none());
    }

    #[test]
    fn io_constructor_keeps_context() {
        let err = LabelCacheError::io(
            "reading cache entry",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(err.to_string(), "IO error: reading cache entry");
    }
}
