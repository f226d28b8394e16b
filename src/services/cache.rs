use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use crate::core::filter_and_sort_indices;
use crate::models::{Candidate, FilterConfig, SortKey};

/// Cache key: the full filter configuration plus the ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub config: FilterConfig,
    pub sort: SortKey,
}

impl SearchKey {
    pub fn new(config: &FilterConfig, sort: SortKey) -> Self {
        Self { config: config.clone(), sort }
    }
}

/// Memoized directory evaluations
///
/// Entries are positions into the candidate list they were computed from, so
/// the owner must call [`SearchCache::clear`] whenever that list changes.
pub struct SearchCache {
    entries: LruCache<SearchKey, Vec<usize>>,
    hits: u64,
    misses: u64,
}

impl SearchCache {
    /// `None` when `capacity` is zero, i.e. caching disabled
    pub fn new(capacity: usize) -> Option<Self> {
        let capacity = NonZeroUsize::new(capacity)?;
        Some(Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        })
    }

    /// Look up the view for this configuration, computing it on a miss
    pub fn get_or_compute(
        &mut self,
        candidates: &[Candidate],
        config: &FilterConfig,
        sort: SortKey,
    ) -> Vec<usize> {
        let key = SearchKey::new(config, sort);

        if let Some(indices) = self.entries.get(&key) {
            self.hits += 1;
            tracing::trace!("Search cache hit: {:?}", key);
            return indices.clone();
        }

        self.misses += 1;
        tracing::trace!("Search cache miss: {:?}", key);

        let indices = filter_and_sort_indices(candidates, config, sort);
        self.entries.put(key, indices.clone());
        indices
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        tracing::debug!("Search cache cleared");
    }

    pub fn stats(&self) -> CacheStats {
        let lookups = self.hits + self.misses;
        CacheStats {
            size: self.entries.len(),
            capacity: self.entries.cap().get(),
            hit_count: self.hits,
            miss_count: self.misses,
            hit_rate: if lookups > 0 { self.hits as f64 / lookups as f64 } else { 0.0 },
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    pub hit_rate: f64,
}
