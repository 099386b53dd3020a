//! Column sizing schemas.

use serde::{Deserialize, Serialize};

/// Declarative width and priority policy for one column.
///
/// A schema is plain input data: the resolver reads it and never mutates it.
/// Widths are logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Identifier, unique within one schema set.
    pub key: String,
    /// Floor the column either holds or gets omitted below.
    pub min_width: f32,
    /// Preferred width; only growable columns go beyond it.
    pub max_width: f32,
    /// Lower values are shrunk and hidden last.
    pub shrink_priority: i32,
    /// Column may be omitted (width 0) under space pressure.
    #[serde(default)]
    pub allowed_to_hide: bool,
    /// Column may receive slack beyond `max_width`.
    #[serde(default)]
    pub allowed_to_grow_beyond_max_width: bool,
}

impl ColumnSchema {
    /// Create a schema that is neither hideable nor growable.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        min_width: f32,
        max_width: f32,
        shrink_priority: i32,
    ) -> Self {
        Self {
            key: key.into(),
            min_width,
            max_width,
            shrink_priority,
            allowed_to_hide: false,
            allowed_to_grow_beyond_max_width: false,
        }
    }

    /// Create a schema whose min and max width are equal.
    #[must_use]
    pub fn fixed(key: impl Into<String>, width: f32, shrink_priority: i32) -> Self {
        Self::new(key, width, width, shrink_priority)
    }

    /// Allow the column to be omitted when space runs out.
    #[must_use]
    pub const fn hideable(mut self) -> Self {
        self.allowed_to_hide = true;
        self
    }

    /// Allow the column to take slack beyond its max width.
    #[must_use]
    pub const fn growable(mut self) -> Self {
        self.allowed_to_grow_beyond_max_width = true;
        self
    }

    /// Set the hide flag explicitly.
    #[must_use]
    pub const fn with_hide(mut self, allowed: bool) -> Self {
        self.allowed_to_hide = allowed;
        self
    }

    /// Set the grow flag explicitly.
    #[must_use]
    pub const fn with_grow(mut self, allowed: bool) -> Self {
        self.allowed_to_grow_beyond_max_width = allowed;
        self
    }

    /// Room between min and max width, never negative.
    #[must_use]
    pub fn flex_range(&self) -> f32 {
        (self.max_width - self.min_width).max(0.0)
    }
}

/// Sum of `min_width` over a schema set.
#[must_use]
pub fn total_min_width(schemas: &[ColumnSchema]) -> f32 {
    schemas.iter().map(|s| s.min_width).sum()
}

/// Sum of `max_width` over a schema set.
#[must_use]
pub fn total_max_width(schemas: &[ColumnSchema]) -> f32 {
    schemas.iter().map(|s| s.max_width).sum()
}
