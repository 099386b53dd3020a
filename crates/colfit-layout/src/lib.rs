#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Column width resolution for responsive containers.
//!
//! Given a container's content width and an ordered list of
//! [`ColumnSchema`](colfit_core::ColumnSchema)s, decides each column's width,
//! which columns are omitted, and which receive slack beyond their max.
//!
//! - [`resolve_column_widths`]: the pure allocation function
//! - [`validate_schemas`] / [`diagnose_schemas`]: structural checks
//! - [`ColumnWidthResolver`]: validation policy plus allocation
//! - [`ColumnLayoutEngine`]: cached re-resolution as the width changes

mod cache;
mod engine;
mod resolver;
mod validation;

pub use cache::WidthCache;
pub use engine::ColumnLayoutEngine;
pub use resolver::{
    resolve_allocation, resolve_column_widths, Allocation, AllocationMode, ColumnWidthResolver,
};
pub use validation::{diagnose_schemas, validate_schemas};
