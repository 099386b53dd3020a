//! colfit: priority-driven column width allocation.
//!
//! Decides how a container's width is split among columns that can shrink,
//! hide, or grow, without any dependency on a rendering layer.
//!
//! ```
//! use colfit::prelude::*;
//!
//! let columns = vec![
//!     ColumnSchema::new("name", 50.0, 100.0, 1),
//!     ColumnSchema::new("notes", 100.0, 200.0, 2).hideable(),
//! ];
//! assert_eq!(resolve_column_widths(60.0, &columns), vec![60.0, 0.0]);
//! ```

pub use colfit_core::*;
pub use colfit_layout as layout;
pub use colfit_yaml as yaml;

pub use colfit_layout::{
    diagnose_schemas, resolve_allocation, resolve_column_widths, validate_schemas, Allocation,
    AllocationMode, ColumnLayoutEngine, ColumnWidthResolver,
};
pub use colfit_yaml::{ColumnManifest, ParseError};

/// Common imports for resolver callers.
pub mod prelude {
    pub use colfit_core::{ColumnSchema, ResolveOptions, SchemaError, ValidationMode};
    pub use colfit_layout::{
        resolve_column_widths, Allocation, AllocationMode, ColumnLayoutEngine,
        ColumnWidthResolver,
    };
    pub use colfit_yaml::ColumnManifest;
}
