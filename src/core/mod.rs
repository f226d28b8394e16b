// Core algorithm exports
pub mod active_filters;
pub mod engine;
pub mod filters;
pub mod sorting;

pub use active_filters::{active_filters, clear_filter};
pub use engine::{filter_and_sort, filter_and_sort_indices, filter_and_sort_refs, MatchFilterEngine, SearchResult};
pub use filters::{matches_budget, matches_filters, matches_gender, matches_lifestyle, matches_location};
pub use sorting::{compare_candidates, sort_candidates, sort_candidates_by};
