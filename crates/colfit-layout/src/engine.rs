//! Column layout engine with memoization.

use colfit_core::{ColumnSchema, ResolveOptions, Result};

use crate::cache::WidthCache;
use crate::resolver::{Allocation, ColumnWidthResolver};

/// Owns one schema set and re-resolves it as the container width changes.
///
/// Recent widths are served from a bounded [`WidthCache`], so a continuous
/// resize never grows memory past the cache capacity. Replacing the schema
/// set clears the cache. Validation failures are returned and never cached.
#[derive(Debug, Default)]
pub struct ColumnLayoutEngine {
    schemas: Vec<ColumnSchema>,
    resolver: ColumnWidthResolver,
    cache: WidthCache,
}

impl ColumnLayoutEngine {
    /// Create an engine for a schema set with default options.
    #[must_use]
    pub fn new(schemas: Vec<ColumnSchema>) -> Self {
        Self::with_options(schemas, ResolveOptions::default())
    }

    /// Create an engine for a schema set.
    #[must_use]
    pub fn with_options(schemas: Vec<ColumnSchema>, options: ResolveOptions) -> Self {
        Self {
            schemas,
            resolver: ColumnWidthResolver::new(options),
            cache: WidthCache::new(),
        }
    }

    /// Keep at most `capacity` recent widths instead of the default.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = WidthCache::with_capacity(capacity);
        self
    }

    /// The schema set being laid out.
    #[must_use]
    pub fn schemas(&self) -> &[ColumnSchema] {
        &self.schemas
    }

    /// Replace the schema set.
    pub fn set_schemas(&mut self, schemas: Vec<ColumnSchema>) {
        self.schemas = schemas;
        self.cache.clear();
    }

    /// Compute the allocation for a content width.
    pub fn layout(&mut self, content_width: f32) -> Result<Allocation> {
        if let Some(allocation) = self.cache.get(content_width) {
            return Ok(allocation);
        }

        let allocation = self
            .resolver
            .resolve_allocation(content_width, &self.schemas)?;
        self.cache.insert(content_width, allocation.clone());
        Ok(allocation)
    }

    /// Compute widths for a content width.
    pub fn widths(&mut self, content_width: f32) -> Result<Vec<f32>> {
        self.layout(content_width).map(Allocation::into_widths)
    }

    /// The underlying cache.
    #[must_use]
    pub const fn cache(&self) -> &WidthCache {
        &self.cache
    }

    /// Clear the layout cache.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
