//! Column manifest loaded from YAML.

use colfit_core::{total_min_width, ColumnSchema, ResolveOptions, ValidationMode};
use colfit_layout::{validate_schemas, Allocation, ColumnLayoutEngine, ColumnWidthResolver};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ParseError;

/// A named column set with its resolver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnManifest {
    /// Column set name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Default content width
    #[serde(default)]
    pub content_width: Option<f32>,
    /// Validation policy
    #[serde(default)]
    pub validation: ValidationMode,
    /// Columns in display order
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,
}

impl ColumnManifest {
    /// Parse a manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Resolver options described by this manifest.
    #[must_use]
    pub const fn options(&self) -> ResolveOptions {
        ResolveOptions {
            validation: self.validation,
        }
    }

    /// Check the column set regardless of the validation policy.
    ///
    /// Without a `content_width` the min-width budget check is skipped.
    pub fn validate(&self) -> Result<(), ParseError> {
        let width = self
            .content_width
            .unwrap_or_else(|| total_min_width(&self.columns));
        validate_schemas(width, &self.columns)?;
        Ok(())
    }

    /// Resolve the columns for a content width.
    pub fn resolve(&self, content_width: f32) -> Result<Allocation, ParseError> {
        let resolver = ColumnWidthResolver::new(self.options());
        Ok(resolver.resolve_allocation(content_width, &self.columns)?)
    }

    /// Resolve the columns at the manifest's own `content_width`.
    pub fn resolve_default(&self) -> Result<Allocation, ParseError> {
        let width = self
            .content_width
            .ok_or_else(|| ParseError::MissingField("content_width".to_string()))?;
        self.resolve(width)
    }

    /// Build a caching engine over these columns.
    #[must_use]
    pub fn engine(&self) -> ColumnLayoutEngine {
        ColumnLayoutEngine::with_options(self.columns.clone(), self.options())
    }
}
