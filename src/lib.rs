//! Roommate Match - filter, sort and match-ranking engine for a roommate directory
//!
//! The core is a pure pipeline: a candidate list, a filter configuration and
//! a sort key go in, an ordered view comes out. Around it sit the
//! caller-owned directory state (filters, saved profiles, top matches), an
//! optional result cache and a JSON dataset loader.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_and_sort, MatchFilterEngine, SearchResult};
pub use crate::models::{Candidate, FilterConfig, FilterPatch, Gender, GenderFilter, SortKey};
pub use crate::services::RoommateDirectory;
