//! Error types for permissions-gen

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while locating the replaceable region of an existing host file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    /// No string literal equal to the key exists one level inside the outer object.
    #[error("key {key:?} not found")]
    KeyNotFound { key: String },

    /// A string literal has no closing quote before the end of the text.
    #[error("unterminated string at {pos}")]
    UnterminatedString { pos: usize },

    /// An object or array has no matching close before the end of the text.
    #[error("unterminated {kind} starting at {pos}")]
    UnterminatedDelimiter { kind: &'static str, pos: usize },

    /// A scanner primitive was pointed at the wrong character.
    #[error("expected {expected:?} at {pos}")]
    UnexpectedChar { expected: char, pos: usize },

    #[error("{key} key missing colon")]
    MissingColon { key: String },

    #[error("{key} missing value")]
    MissingValue { key: String },

    #[error("{key} value must be object")]
    ValueNotObject { key: String },

    /// The start marker shares its line with other content.
    #[error("marker must be on its own line: {line:?}")]
    MarkerNotAlone { line: String },

    /// Both markers exist but the end marker comes first, and no structural key was found either.
    #[error("end marker at {end} precedes start marker at {start}")]
    MarkersOutOfOrder { start: usize, end: usize },
}

/// Top-level error for a permissions-gen run.
#[derive(Debug, Error)]
pub enum PermissionsGenError {
    /// The permissions document is malformed.
    #[error("Invalid permissions document: {0}")]
    Config(String),

    /// No splice point could be found in an artifact's host file.
    #[error("{artifact}: {source}")]
    Locate {
        artifact: &'static str,
        #[source]
        source: LocateError,
    },

    /// A rendered fragment could not be produced.
    #[error("Failed to render {0}")]
    Render(String),

    /// Read or write failure at the filesystem boundary.
    #[error("Failed to {operation} {}: {source}", .path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PermissionsGenError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a rendering error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Attach the artifact name to a locate failure.
    pub fn locate(artifact: &'static str, source: LocateError) -> Self {
        Self::Locate { artifact, source }
    }

    /// Create a filesystem error for `operation` on `path`.
    pub fn file_system(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for PermissionsGenError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(format!("parse yaml: {}", err))
    }
}

impl From<serde_json::Error> for PermissionsGenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(format!("json: {}", err))
    }
}

/// Result alias used across the crate.
pub type PermissionsGenResult<T> = std::result::Result<T, PermissionsGenError>;
