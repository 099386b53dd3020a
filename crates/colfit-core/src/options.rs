//! Per-call resolver configuration.

use serde::{Deserialize, Serialize};

/// When schema validation runs before allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Never validate.
    Off,
    /// Validate only in builds with debug assertions.
    #[default]
    DebugOnly,
    /// Validate on every call.
    Always,
}

impl ValidationMode {
    /// Whether validation runs for this build.
    #[must_use]
    pub const fn is_active(self) -> bool {
        match self {
            Self::Off => false,
            Self::DebugOnly => cfg!(debug_assertions),
            Self::Always => true,
        }
    }
}

/// Options carried by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Validation policy.
    #[serde(default)]
    pub validation: ValidationMode,
}

impl ResolveOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation mode.
    #[must_use]
    pub const fn validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Options that validate on every call.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validation: ValidationMode::Always,
        }
    }

    /// Options that never validate.
    #[must_use]
    pub const fn unchecked() -> Self {
        Self {
            validation: ValidationMode::Off,
        }
    }
}
