//! Core types for the colfit column width resolver.
//!
//! This crate provides the plain data shared by the other colfit crates:
//! - Column policy: [`ColumnSchema`]
//! - Per-call configuration: [`ResolveOptions`], [`ValidationMode`]
//! - Configuration errors: [`SchemaError`]

mod error;
mod options;
mod schema;

pub use error::{Result, SchemaError};
pub use options::{ResolveOptions, ValidationMode};
pub use schema::{total_max_width, total_min_width, ColumnSchema};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<ColumnSchema>();
        assert_send_sync::<ResolveOptions>();
        assert_send_sync::<SchemaError>();
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_flex_range_never_negative(min in 0.0f32..1000.0, max in 0.0f32..1000.0) {
                let schema = ColumnSchema::new("c", min, max, 0);
                prop_assert!(schema.flex_range() >= 0.0);
            }

            #[test]
            fn prop_total_min_not_above_total_max(
                widths in prop::collection::vec((0.0f32..500.0, 0.0f32..500.0), 0..12)
            ) {
                let schemas: Vec<ColumnSchema> = widths
                    .iter()
                    .enumerate()
                    .map(|(i, &(min, extra))| {
                        ColumnSchema::new(format!("c{i}"), min, min + extra, i as i32)
                    })
                    .collect();
                prop_assert!(total_min_width(&schemas) <= total_max_width(&schemas));
            }
        }
    }
}
