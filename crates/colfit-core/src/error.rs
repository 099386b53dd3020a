//! Schema configuration errors.

use thiserror::Error;

/// A structural misconfiguration in a schema set.
///
/// Each violated invariant has its own variant. These are developer-facing
/// errors; numeric overflow during allocation is never reported here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Two schemas share a shrink priority.
    #[error("shrink priority {priority} is used by more than one column")]
    DuplicatePriority { priority: i32 },

    /// Sorted shrink priorities skip a value.
    #[error("shrink priorities are not consecutive: expected {expected}, found {found}")]
    NonConsecutivePriorities { expected: i32, found: i32 },

    /// Minimum widths cannot fit even before any column is hidden.
    #[error("sum of min widths ({total_min_width}) exceeds content width ({content_width})")]
    MinWidthOverflow {
        total_min_width: f32,
        content_width: f32,
    },

    /// A schema's floor is above its ceiling.
    #[error("column '{key}' has min width {min_width} greater than max width {max_width}")]
    MinExceedsMax {
        key: String,
        min_width: f32,
        max_width: f32,
    },

    /// Two schemas share a key.
    #[error("column key '{key}' is used more than once")]
    DuplicateKey { key: String },

    /// A schema width is negative or not finite.
    #[error("column '{key}' has invalid {field}: {value}")]
    InvalidWidth {
        key: String,
        field: &'static str,
        value: f32,
    },

    /// The content width is negative or not finite.
    #[error("invalid content width: {0}")]
    InvalidContentWidth(f32),
}

/// Result alias for schema validation.
pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
