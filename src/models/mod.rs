// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActiveFilter, Candidate, FilterConfig, FilterKind, FilterPatch, Gender, GenderFilter,
    ParseError, SortKey, DEFAULT_MAX_BUDGET, dedup_tags,
};
pub use requests::{RequestError, SearchQuery, SearchRequest};
pub use responses::SearchResponse;
