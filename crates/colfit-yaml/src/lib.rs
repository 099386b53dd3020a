//! YAML column manifests for colfit.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::ColumnManifest;
