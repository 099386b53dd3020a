//! Bounded memo of allocations for one schema set.
//!
//! A resizing container produces a new width on almost every event, so the
//! cache holds a fixed number of widths and drops the one requested longest
//! ago when a new width arrives. Entries are only meaningful for the schema
//! set they were resolved against; owners clear the cache when it changes.

use std::collections::HashMap;

use crate::resolver::Allocation;

#[derive(Debug, Clone)]
struct Slot {
    allocation: Allocation,
    last_used: u64,
}

/// Least-recently-used cache of allocations keyed by content width.
#[derive(Debug, Clone)]
pub struct WidthCache {
    slots: HashMap<u32, Slot>,
    capacity: usize,
    tick: u64,
    hits: usize,
    misses: usize,
    evictions: usize,
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl WidthCache {
    /// Widths kept by [`WidthCache::new`].
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Create a cache holding [`Self::DEFAULT_CAPACITY`] widths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache holding at most `capacity` widths (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: HashMap::with_capacity(capacity),
            capacity,
            tick: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Maximum number of widths held.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Allocation previously stored for `content_width`, marking it recent.
    pub fn get(&mut self, content_width: f32) -> Option<Allocation> {
        self.tick += 1;
        match self.slots.get_mut(&width_key(content_width)) {
            Some(slot) => {
                slot.last_used = self.tick;
                self.hits += 1;
                Some(slot.allocation.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store the allocation for `content_width`, evicting the stalest width
    /// when full.
    pub fn insert(&mut self, content_width: f32, allocation: Allocation) {
        self.tick += 1;
        let key = width_key(content_width);
        if !self.slots.contains_key(&key) && self.slots.len() >= self.capacity {
            self.evict_stalest();
        }
        self.slots.insert(
            key,
            Slot {
                allocation,
                last_used: self.tick,
            },
        );
    }

    fn evict_stalest(&mut self) {
        let stalest = self
            .slots
            .iter()
            .min_by_key(|(_, slot)| slot.last_used)
            .map(|(&key, _)| key);
        if let Some(key) = stalest {
            self.slots.remove(&key);
            self.evictions += 1;
            tracing::trace!(width = f32::from_bits(key), "evicted cached allocation");
        }
    }

    /// Whether `content_width` is cached, without touching recency or stats.
    #[must_use]
    pub fn contains(&self, content_width: f32) -> bool {
        self.slots.contains_key(&width_key(content_width))
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.tick = 0;
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }

    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Widths dropped to stay within capacity.
    #[must_use]
    pub const fn evictions(&self) -> usize {
        self.evictions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// -0.0 and 0.0 resolve identically, so they share a slot.
fn width_key(content_width: f32) -> u32 {
    if content_width == 0.0 {
        0.0_f32.to_bits()
    } else {
        content_width.to_bits()
    }
}
