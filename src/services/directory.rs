use crate::core::{active_filters, clear_filter, filter_and_sort_indices, sorting::sort_candidates};
use crate::models::{ActiveFilter, Candidate, FilterConfig, FilterPatch, SearchQuery, SearchResponse, SortKey};
use crate::services::cache::{CacheStats, SearchCache};

/// Caller-owned directory state
///
/// Holds the candidate list, the saved profile ids and the current filters.
/// Every mutation takes `&mut self`, so updates are serialized by whoever owns
/// the directory; a multi-threaded host wraps it in a mutex.
pub struct RoommateDirectory {
    candidates: Vec<Candidate>,
    saved: Vec<String>,
    filters: FilterConfig,
    sort_key: SortKey,
    cache: Option<SearchCache>,
}

impl RoommateDirectory {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            saved: Vec::new(),
            filters: FilterConfig::default(),
            sort_key: SortKey::default(),
            cache: None,
        }
    }

    /// Directory whose searches are memoized in an LRU of `capacity` entries
    pub fn with_cache(candidates: Vec<Candidate>, capacity: usize) -> Self {
        Self {
            cache: SearchCache::new(capacity),
            ..Self::new(candidates)
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// Merge a partial update into the current filters
    pub fn set_filters(&mut self, patch: FilterPatch) {
        if patch.is_empty() {
            return;
        }
        tracing::debug!("Applying filter patch: {:?}", patch);
        self.filters.apply(patch);
    }

    pub fn reset_filters(&mut self) {
        tracing::debug!("Resetting filters to defaults");
        self.filters = FilterConfig::default();
    }

    /// Add the lifestyle tag if absent, drop it if present
    pub fn toggle_lifestyle(&mut self, tag: &str) {
        if !self.filters.remove_tag(tag) {
            self.filters.add_tag(tag);
        }
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        active_filters(&self.filters)
    }

    pub fn remove_filter(&mut self, filter: &ActiveFilter) {
        tracing::debug!("Removing filter: {}", filter.key);
        clear_filter(&mut self.filters, filter);
    }

    /// Save or unsave a profile; returns whether it is saved afterwards
    pub fn toggle_save(&mut self, id: &str) -> bool {
        if let Some(pos) = self.saved.iter().position(|saved| saved == id) {
            self.saved.remove(pos);
            false
        } else {
            self.saved.push(id.to_string());
            true
        }
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|saved| saved == id)
    }

    pub fn saved_ids(&self) -> &[String] {
        &self.saved
    }

    /// Saved candidates, in directory order; ids no longer listed are skipped
    pub fn saved_profiles(&self) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|candidate| self.is_saved(&candidate.id))
            .collect()
    }

    /// Best `n` candidates by match score, ignoring the filters
    pub fn top_matches(&self, n: usize) -> Vec<&Candidate> {
        let mut ranked: Vec<&Candidate> = self.candidates.iter().collect();
        sort_candidates(&mut ranked, SortKey::BestMatch);
        ranked.truncate(n);
        ranked
    }

    /// Evaluate the current filters and ordering
    pub fn search(&mut self) -> Vec<Candidate> {
        let indices = match self.cache.as_mut() {
            Some(cache) => cache.get_or_compute(&self.candidates, &self.filters, self.sort_key),
            None => filter_and_sort_indices(&self.candidates, &self.filters, self.sort_key),
        };

        tracing::debug!(
            "Search returned {} of {} candidates (sort: {})",
            indices.len(),
            self.candidates.len(),
            self.sort_key
        );

        indices
            .into_iter()
            .map(|idx| self.candidates[idx].clone())
            .collect()
    }

    /// Apply a search query and build the response view
    ///
    /// The query's filters are layered over the current ones and its sort
    /// replaces the current sort when present. `total_results` counts every
    /// match; `matches` is cut to the query's limit, or `default_limit` when
    /// the query has none.
    pub fn respond(&mut self, query: SearchQuery, default_limit: Option<usize>) -> SearchResponse {
        self.set_filters(query.patch);
        if let Some(sort) = query.sort {
            self.set_sort_key(sort);
        }

        let mut matches = self.search();
        let total_results = matches.len();
        if let Some(limit) = query.limit.or(default_limit) {
            matches.truncate(limit);
        }

        tracing::info!(
            "Returning {} of {} matches (from {} candidates)",
            matches.len(),
            total_results,
            self.candidates.len()
        );

        SearchResponse {
            matches,
            total_results,
            total_candidates: self.candidates.len(),
            active_filters: self.active_filters(),
            sort: self.sort_key,
            generated_at: chrono::Utc::now(),
        }
    }

    /// Swap in a new candidate list; saved ids are kept
    pub fn replace_candidates(&mut self, candidates: Vec<Candidate>) {
        tracing::info!("Replacing {} candidates with {}", self.candidates.len(), candidates.len());
        self.candidates = candidates;
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(SearchCache::stats)
    }
}
