use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for jsr-kit operations
#[derive(Error, Debug)]
pub enum JsrKitError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Invalid project name: {0}")]
    InvalidName(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest is not valid JSON: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Manifest '{}' must contain a JSON object", .0.display())]
    ManifestShape(PathBuf),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}

/// Convenience type alias for Results in jsr-kit
pub type Result<T> = std::result::Result<T, JsrKitError>;

impl JsrKitError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        JsrKitError::Usage(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        JsrKitError::Version(msg.into())
    }

    /// Create a project name validation error
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        JsrKitError::InvalidName(msg.into())
    }

    /// Attach the offending path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JsrKitError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        JsrKitError::Config(msg.into())
    }

    /// Create an input error with context
    pub fn input(msg: impl Into<String>) -> Self {
        JsrKitError::Input(msg.into())
    }

    /// Whether the error is a missing file or directory
    pub fn is_not_found(&self) -> bool {
        matches!(self, JsrKitError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JsrKitError::usage("missing argument");
        assert_eq!(err.to_string(), "Usage error: missing argument");
    }

    #[test]
    fn test_io_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = JsrKitError::io("deno.json", io_err);
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("deno.json"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_permission_error_is_not_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!JsrKitError::io(".git", io_err).is_not_found());
    }

    #[test]
    fn test_manifest_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: JsrKitError = serde_err.into();
        assert!(err.to_string().starts_with("Manifest is not valid JSON"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (JsrKitError::usage("x"), "Usage error"),
            (JsrKitError::version("x"), "Version error"),
            (JsrKitError::invalid_name("x"), "Invalid project name"),
            (JsrKitError::config("x"), "Configuration error"),
            (JsrKitError::input("x"), "Input error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
