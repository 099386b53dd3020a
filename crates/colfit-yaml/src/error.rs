//! Error types for manifest loading.

use colfit_core::SchemaError;
use std::fmt;

/// Error type for column manifests.
#[derive(Debug)]
pub enum ParseError {
    /// YAML parsing or serialization error
    Yaml(serde_yaml_ng::Error),
    /// Manifest file could not be read
    Io(std::io::Error),
    /// Column set failed validation
    Schema(SchemaError),
    /// Missing required field
    MissingField(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Schema(e) => write!(f, "Schema error: {e}"),
            Self::MissingField(field) => write!(f, "Missing required field: {field}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Schema(e) => Some(e),
            Self::MissingField(_) => None,
        }
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<SchemaError> for ParseError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}
