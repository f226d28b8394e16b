// Service exports
pub mod cache;
pub mod dataset;
pub mod directory;

pub use cache::{CacheStats, SearchCache, SearchKey};
pub use dataset::{load_candidates, parse_candidates, DatasetError};
pub use directory::RoommateDirectory;
