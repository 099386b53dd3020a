//! Column width resolution.
//!
//! Distributes a content width among columns in passes:
//!
//! 1. Partition into hideable and always-visible columns, each sorted by
//!    ascending shrink priority
//! 2. Start visible columns at `max_width` and shrink the least protected
//!    ones toward `min_width` until the deficit is gone
//! 3. Admit hideable columns greedily while slack remains
//! 4. Fall back to bare minimums if even those overflow
//! 5. Otherwise hand out either grow slack (equal split) or the budget above
//!    the minimums (first come, in processing order)
//! 6. Map widths back to input order by key
//!
//! The functions here are pure. Overflow is never an error; the
//! [`AllocationMode::FloorOverflow`] result is the degraded outcome.

use colfit_core::{ColumnSchema, ResolveOptions, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::validation::validate_schemas;

/// Which distribution path produced an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AllocationMode {
    /// No columns were given.
    #[default]
    Empty,
    /// Every visible column reached `max_width`; growable columns split the rest.
    Slack,
    /// Columns sit between their min and max widths.
    Constrained,
    /// Minimum widths alone overflow; every visible column holds its minimum.
    FloorOverflow,
}

/// Widths for one schema set, in input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Allocation {
    /// One width per input schema; `0.0` means the column is omitted.
    pub widths: Vec<f32>,
    /// Path taken by the final distribution.
    pub mode: AllocationMode,
}

impl Allocation {
    /// Allocation for an empty schema set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            widths: Vec::new(),
            mode: AllocationMode::Empty,
        }
    }

    /// Sum of all widths.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.widths.iter().sum()
    }

    /// Number of columns with a non-zero width.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.widths.iter().filter(|&&w| w > 0.0).count()
    }

    /// Whether the column at `index` is shown.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.widths.get(index).is_some_and(|&w| w > 0.0)
    }

    /// Amount by which the allocation exceeds `content_width`, or zero.
    #[must_use]
    pub fn overflow(&self, content_width: f32) -> f32 {
        (self.total_width() - content_width).max(0.0)
    }

    /// Consume the allocation, returning its widths.
    #[must_use]
    pub fn into_widths(self) -> Vec<f32> {
        self.widths
    }
}

/// Resolve widths without validation.
///
/// Returns one width per schema in input order.
#[must_use]
pub fn resolve_column_widths(content_width: f32, schemas: &[ColumnSchema]) -> Vec<f32> {
    resolve_allocation(content_width, schemas).widths
}

/// Resolve widths without validation, reporting the distribution mode.
#[must_use]
pub fn resolve_allocation(content_width: f32, schemas: &[ColumnSchema]) -> Allocation {
    if schemas.is_empty() {
        return Allocation::empty();
    }

    let (mut hideable, mut visible): (Vec<&ColumnSchema>, Vec<&ColumnSchema>) =
        schemas.iter().partition(|s| s.allowed_to_hide);
    visible.sort_by_key(|s| s.shrink_priority);
    hideable.sort_by_key(|s| s.shrink_priority);

    tracing::debug!(
        content_width,
        visible = visible.len(),
        hideable = hideable.len(),
        "resolving column widths"
    );

    let mut widths: Vec<f32> = visible.iter().map(|s| s.max_width).collect();
    shrink_to_fit(content_width, &visible, &mut widths);
    admit_hidden(content_width, &hideable, &mut visible, &mut widths);

    let min_total: f32 = visible.iter().map(|s| s.min_width).sum();
    let mode = if min_total > content_width {
        tracing::warn!(
            content_width,
            min_total,
            "minimum widths overflow content width, falling back to floors"
        );
        for (width, schema) in widths.iter_mut().zip(&visible) {
            *width = schema.min_width;
        }
        AllocationMode::FloorOverflow
    } else {
        distribute(content_width, &visible, &mut widths)
    };

    Allocation {
        widths: reassemble(schemas, &visible, &widths),
        mode,
    }
}

/// Walk from the least protected column back, removing width down to each
/// floor until the starting widths fit.
fn shrink_to_fit(content_width: f32, visible: &[&ColumnSchema], widths: &mut [f32]) {
    let mut deficit = widths.iter().sum::<f32>() - content_width;
    if deficit <= 0.0 {
        return;
    }
    tracing::trace!(deficit, "shrinking visible columns");

    for (width, schema) in widths.iter_mut().zip(visible).rev() {
        if deficit <= 0.0 {
            break;
        }
        let cut = deficit.min((*width - schema.min_width).max(0.0));
        *width -= cut;
        deficit -= cut;
    }
}

/// Greedy one-pass admission of hideable columns into remaining slack.
fn admit_hidden<'a>(
    content_width: f32,
    hideable: &[&'a ColumnSchema],
    visible: &mut Vec<&'a ColumnSchema>,
    widths: &mut Vec<f32>,
) {
    let mut slack = content_width - widths.iter().sum::<f32>();
    for &schema in hideable {
        if slack <= 0.0 {
            break;
        }
        if slack >= schema.min_width {
            let width = schema.max_width.min(slack);
            tracing::trace!(key = %schema.key, width, "admitting hideable column");
            visible.push(schema);
            widths.push(width);
            slack -= width;
        }
    }
}

/// Final pass over the visible set. Assumes the minimums fit.
fn distribute(content_width: f32, visible: &[&ColumnSchema], widths: &mut [f32]) -> AllocationMode {
    let max_total: f32 = visible.iter().map(|s| s.max_width).sum();

    if content_width >= max_total {
        let growable = visible
            .iter()
            .filter(|s| s.allowed_to_grow_beyond_max_width)
            .count();
        let share = if growable > 0 {
            (content_width - max_total) / growable as f32
        } else {
            0.0
        };
        tracing::debug!(growable, share, "slack distribution");

        for (width, schema) in widths.iter_mut().zip(visible) {
            *width = if schema.allowed_to_grow_beyond_max_width {
                schema.max_width + share
            } else {
                schema.max_width
            };
        }
        return AllocationMode::Slack;
    }

    let min_total: f32 = visible.iter().map(|s| s.min_width).sum();
    let mut budget = content_width - min_total;
    tracing::debug!(budget, "constrained distribution");

    for (width, schema) in widths.iter_mut().zip(visible) {
        let extra = budget.min(schema.flex_range()).max(0.0);
        *width = schema.min_width + extra;
        budget -= extra;
    }
    AllocationMode::Constrained
}

/// Map processing-order widths back onto input order. Columns that never
/// became visible get zero.
fn reassemble(schemas: &[ColumnSchema], visible: &[&ColumnSchema], widths: &[f32]) -> Vec<f32> {
    let by_key: HashMap<&str, f32> = visible
        .iter()
        .zip(widths)
        .map(|(schema, &width)| (schema.key.as_str(), width))
        .collect();

    schemas
        .iter()
        .map(|s| by_key.get(s.key.as_str()).copied().unwrap_or(0.0))
        .collect()
}

/// Resolver carrying per-call options.
///
/// Validation runs according to [`ResolveOptions::validation`]; a failed
/// check aborts the call. An empty schema set is never validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidthResolver {
    options: ResolveOptions,
}

impl ColumnWidthResolver {
    /// Create a resolver with the given options.
    #[must_use]
    pub const fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Validate (if enabled) and resolve widths.
    pub fn resolve(&self, content_width: f32, schemas: &[ColumnSchema]) -> Result<Vec<f32>> {
        self.resolve_allocation(content_width, schemas)
            .map(Allocation::into_widths)
    }

    /// Validate (if enabled) and resolve, keeping the distribution mode.
    pub fn resolve_allocation(
        &self,
        content_width: f32,
        schemas: &[ColumnSchema],
    ) -> Result<Allocation> {
        if schemas.is_empty() {
            return Ok(Allocation::empty());
        }
        if self.options.validation.is_active() {
            validate_schemas(content_width, schemas)?;
        }
        Ok(resolve_allocation(content_width, schemas))
    }
}
