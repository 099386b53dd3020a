//! Structural checks on a schema set.
//!
//! Validation is diagnostic only: it never clamps or reorders input, and the
//! resolver's numeric output is the same whether or not it ran.

use colfit_core::{total_min_width, ColumnSchema, Result, SchemaError};
use std::collections::HashSet;

/// Check a schema set, stopping at the first violated invariant.
///
/// Checks run in this order: width sanity, shrink priorities, min-width sum
/// against `content_width`, per-column `min <= max`, unique keys.
pub fn validate_schemas(content_width: f32, schemas: &[ColumnSchema]) -> Result<()> {
    match diagnose_schemas(content_width, schemas).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collect every violated invariant in a schema set.
#[must_use]
pub fn diagnose_schemas(content_width: f32, schemas: &[ColumnSchema]) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    check_widths(content_width, schemas, &mut errors);
    check_priorities(schemas, &mut errors);

    let total = total_min_width(schemas);
    if total > content_width {
        errors.push(SchemaError::MinWidthOverflow {
            total_min_width: total,
            content_width,
        });
    }

    for schema in schemas {
        if schema.min_width > schema.max_width {
            errors.push(SchemaError::MinExceedsMax {
                key: schema.key.clone(),
                min_width: schema.min_width,
                max_width: schema.max_width,
            });
        }
    }

    let mut seen = HashSet::with_capacity(schemas.len());
    let mut reported = HashSet::new();
    for schema in schemas {
        if !seen.insert(schema.key.as_str()) && reported.insert(schema.key.as_str()) {
            errors.push(SchemaError::DuplicateKey {
                key: schema.key.clone(),
            });
        }
    }

    errors
}

fn check_widths(content_width: f32, schemas: &[ColumnSchema], errors: &mut Vec<SchemaError>) {
    if !is_valid_width(content_width) {
        errors.push(SchemaError::InvalidContentWidth(content_width));
    }
    for schema in schemas {
        for (field, value) in [("min_width", schema.min_width), ("max_width", schema.max_width)] {
            if !is_valid_width(value) {
                errors.push(SchemaError::InvalidWidth {
                    key: schema.key.clone(),
                    field,
                    value,
                });
            }
        }
    }
}

/// Sorted priorities must step by exactly one. Each duplicated value and
/// each gap is reported once.
fn check_priorities(schemas: &[ColumnSchema], errors: &mut Vec<SchemaError>) {
    let mut priorities: Vec<i32> = schemas.iter().map(|s| s.shrink_priority).collect();
    priorities.sort_unstable();

    let mut last_duplicate = None;
    for pair in priorities.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next == prev {
            if last_duplicate != Some(prev) {
                errors.push(SchemaError::DuplicatePriority { priority: prev });
                last_duplicate = Some(prev);
            }
        } else if next != prev + 1 {
            errors.push(SchemaError::NonConsecutivePriorities {
                expected: prev + 1,
                found: next,
            });
        }
    }
}

fn is_valid_width(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(key: &str, min: f32, max: f32, priority: i32) -> ColumnSchema {
        ColumnSchema::new(key, min, max, priority)
    }

    // =========================================================================
    // Passing configurations
    // =========================================================================

    #[test]
    fn test_valid_set_passes() {
        let schemas = vec![
            schema("a", 50.0, 100.0, 1),
            schema("b", 100.0, 200.0, 2).hideable(),
            schema("c", 50.0, 150.0, 3).growable(),
        ];
        assert!(validate_schemas(500.0, &schemas).is_ok());
        assert!(diagnose_schemas(500.0, &schemas).is_empty());
    }

    #[test]
    fn test_empty_set_passes() {
        assert!(validate_schemas(0.0, &[]).is_ok());
    }

    #[test]
    fn test_priorities_need_not_start_at_one() {
        let schemas = vec![schema("a", 0.0, 10.0, -1), schema("b", 0.0, 10.0, 0)];
        assert!(validate_schemas(100.0, &schemas).is_ok());
    }

    #[test]
    fn test_priority_order_in_input_irrelevant() {
        let schemas = vec![
            schema("a", 0.0, 10.0, 3),
            schema("b", 0.0, 10.0, 1),
            schema("c", 0.0, 10.0, 2),
        ];
        assert!(validate_schemas(100.0, &schemas).is_ok());
    }

    #[test]
    fn test_min_sum_equal_to_content_passes() {
        let schemas = vec![schema("a", 50.0, 100.0, 1), schema("b", 50.0, 100.0, 2)];
        assert!(validate_schemas(100.0, &schemas).is_ok());
    }

    // =========================================================================
    // Priority errors
    // =========================================================================

    #[test]
    fn test_duplicate_priority() {
        let schemas = vec![schema("a", 0.0, 10.0, 1), schema("b", 0.0, 10.0, 1)];
        assert_eq!(
            validate_schemas(100.0, &schemas),
            Err(SchemaError::DuplicatePriority { priority: 1 })
        );
    }

    #[test]
    fn test_triple_duplicate_reported_once() {
        let schemas = vec![
            schema("a", 0.0, 10.0, 2),
            schema("b", 0.0, 10.0, 2),
            schema("c", 0.0, 10.0, 2),
        ];
        let errors = diagnose_schemas(100.0, &schemas);
        assert_eq!(errors, vec![SchemaError::DuplicatePriority { priority: 2 }]);
    }

    #[test]
    fn test_priority_gap() {
        let schemas = vec![schema("a", 0.0, 10.0, 1), schema("b", 0.0, 10.0, 3)];
        assert_eq!(
            validate_schemas(100.0, &schemas),
            Err(SchemaError::NonConsecutivePriorities {
                expected: 2,
                found: 3
            })
        );
    }

    // =========================================================================
    // Width errors
    // =========================================================================

    #[test]
    fn test_min_width_overflow() {
        let schemas = vec![schema("a", 50.0, 100.0, 1), schema("b", 100.0, 200.0, 2)];
        assert_eq!(
            validate_schemas(100.0, &schemas),
            Err(SchemaError::MinWidthOverflow {
                total_min_width: 150.0,
                content_width: 100.0
            })
        );
    }

    #[test]
    fn test_min_exceeds_max() {
        let schemas = vec![schema("a", 120.0, 100.0, 1)];
        assert_eq!(
            validate_schemas(500.0, &schemas),
            Err(SchemaError::MinExceedsMax {
                key: "a".to_string(),
                min_width: 120.0,
                max_width: 100.0
            })
        );
    }

    #[test]
    fn test_negative_width() {
        let schemas = vec![schema("a", -5.0, 100.0, 1)];
        let err = validate_schemas(500.0, &schemas).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidWidth {
                field: "min_width",
                ..
            }
        ));
    }

    #[test]
    fn test_nan_content_width() {
        let err = validate_schemas(f32::NAN, &[schema("a", 0.0, 10.0, 1)]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidContentWidth(_)));
    }

    #[test]
    fn test_infinite_max_width() {
        let schemas = vec![schema("a", 0.0, f32::INFINITY, 1)];
        let errors = diagnose_schemas(100.0, &schemas);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            SchemaError::InvalidWidth {
                field: "max_width",
                ..
            }
        ));
    }

    // =========================================================================
    // Key errors
    // =========================================================================

    #[test]
    fn test_duplicate_key() {
        let schemas = vec![schema("a", 0.0, 10.0, 1), schema("a", 0.0, 10.0, 2)];
        assert_eq!(
            validate_schemas(100.0, &schemas),
            Err(SchemaError::DuplicateKey {
                key: "a".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_key_reported_once() {
        let schemas = vec![
            schema("a", 0.0, 10.0, 1),
            schema("a", 0.0, 10.0, 2),
            schema("a", 0.0, 10.0, 3),
        ];
        assert_eq!(diagnose_schemas(100.0, &schemas).len(), 1);
    }

    // =========================================================================
    // Ordering and aggregation
    // =========================================================================

    #[test]
    fn test_priority_reported_before_overflow() {
        let schemas = vec![schema("a", 80.0, 100.0, 1), schema("b", 80.0, 100.0, 1)];
        assert!(matches!(
            validate_schemas(100.0, &schemas),
            Err(SchemaError::DuplicatePriority { .. })
        ));
    }

    #[test]
    fn test_diagnose_collects_everything() {
        let schemas = vec![
            schema("a", 300.0, 100.0, 1),
            schema("a", 0.0, 10.0, 4),
        ];
        let errors = diagnose_schemas(100.0, &schemas);
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], SchemaError::NonConsecutivePriorities { .. }));
        assert!(matches!(errors[1], SchemaError::MinWidthOverflow { .. }));
        assert!(matches!(errors[2], SchemaError::MinExceedsMax { .. }));
        assert!(matches!(errors[3], SchemaError::DuplicateKey { .. }));
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let schemas = vec![schema("b", 10.0, 5.0, 2), schema("a", 0.0, 10.0, 1)];
        let before = schemas.clone();
        let _ = diagnose_schemas(1.0, &schemas);
        assert_eq!(schemas, before);
    }
}
