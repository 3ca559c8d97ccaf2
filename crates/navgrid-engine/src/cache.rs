//! Consumer-side path cache driven by the store's change records.
//!
//! The store never decides which outstanding paths a write invalidated. A
//! [`PathCache`] does that for its owner: feed it every drained
//! [`ChangeBatch`] and it drops the entries whose routes cross a changed
//! tile. Entries that survive are still walkable, though a later change
//! elsewhere (a door opening) may have made a shorter route available.
//!
//! If the context has moved past the last batch the cache saw, the cache
//! cannot tell what changed and clears itself on the next lookup.

use crate::context::NavContext;
use indexmap::IndexMap;
use navgrid_core::{Generation, GridCoord, LayerId, PathError};
use navgrid_search::Path;
use navgrid_store::{ChangeBatch, TileChange};
use std::sync::Arc;
use tracing::trace;

/// Identifies one cached query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathKey {
    /// Start cell.
    pub start: GridCoord,
    /// Goal cell.
    pub goal: GridCoord,
    /// Layer searched.
    pub layer: LayerId,
}

#[derive(Clone, Debug)]
struct CachedPath {
    path: Arc<Path>,
    computed_at: Generation,
}

/// Hit, miss and eviction counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran a search.
    pub misses: u64,
    /// Entries dropped because a change crossed their route.
    pub invalidated: u64,
    /// Entries dropped to stay within capacity.
    pub evicted: u64,
}

/// FIFO-bounded cache of successful path queries.
#[derive(Debug)]
pub struct PathCache {
    entries: IndexMap<PathKey, CachedPath>,
    capacity: usize,
    synced: Generation,
    stats: CacheStats,
}

impl PathCache {
    /// A cache holding at most `capacity` paths. Zero disables storage.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity,
            synced: Generation::default(),
            stats: CacheStats::default(),
        }
    }

    /// A cache sized by the context's configuration and synced to its
    /// current generation.
    pub fn for_context(ctx: &NavContext) -> Self {
        let mut cache = Self::new(ctx.config().path_cache_capacity);
        cache.synced = ctx.generation();
        cache
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No cached paths.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counters since creation.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Generation of the newest change applied.
    pub fn synced_generation(&self) -> Generation {
        self.synced
    }

    /// The cached path for `key`, if any. Does not touch the counters.
    pub fn get(&self, key: &PathKey) -> Option<Arc<Path>> {
        self.entries.get(key).map(|e| Arc::clone(&e.path))
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Store a path computed at `generation`, evicting the oldest entries
    /// if the cache is full.
    pub fn insert(&mut self, key: PathKey, path: Path, generation: Generation) -> Arc<Path> {
        let path = Arc::new(path);
        if self.capacity == 0 {
            return path;
        }
        self.entries.shift_remove(&key);
        while self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
            self.stats.evicted += 1;
        }
        self.entries.insert(
            key,
            CachedPath {
                path: Arc::clone(&path),
                computed_at: generation,
            },
        );
        path
    }

    /// Drop every entry a change in `batch` invalidates. Returns the number
    /// of entries dropped.
    pub fn apply_changes(&mut self, batch: &ChangeBatch) -> usize {
        let before = self.entries.len();
        for change in &batch.changes {
            let generation = change.generation();
            match *change {
                TileChange::All { .. } => self.entries.clear(),
                TileChange::Layer { .. } => self.entries.retain(|k, e| {
                    e.computed_at >= generation || !change.affects(k.start, k.layer)
                }),
                TileChange::Tile { .. } => self.entries.retain(|k, e| {
                    e.computed_at >= generation
                        || !e.path.cells.iter().any(|&cell| change.affects(cell, k.layer))
                }),
            }
            self.synced = self.synced.max(generation);
        }
        let dropped = before - self.entries.len();
        self.stats.invalidated += dropped as u64;
        if dropped > 0 {
            trace!(dropped, remaining = self.entries.len(), "cached paths invalidated");
        }
        dropped
    }

    /// Answer from the cache or search `ctx` and remember the result.
    /// Failures are never cached.
    ///
    /// # Errors
    ///
    /// Whatever [`NavContext::find_path`] returns.
    pub fn find_path(
        &mut self,
        ctx: &NavContext,
        start: GridCoord,
        goal: GridCoord,
        layer: LayerId,
    ) -> Result<Arc<Path>, PathError> {
        let current = ctx.generation();
        if current != self.synced {
            trace!(cached = %self.synced, current = %current, "cache out of sync, clearing");
            self.entries.clear();
            self.synced = current;
        }
        let key = PathKey { start, goal, layer };
        if let Some(hit) = self.get(&key) {
            self.stats.hits += 1;
            return Ok(hit);
        }
        self.stats.misses += 1;
        let path = ctx.find_path(start, goal, layer)?;
        Ok(self.insert(key, path, current))
    }
}
