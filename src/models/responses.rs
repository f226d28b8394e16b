use serde::{Deserialize, Serialize};
use crate::models::domain::{ActiveFilter, Candidate, SortKey};

/// Filtered directory view handed back to the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub matches: Vec<Candidate>,
    pub total_results: usize,
    pub total_candidates: usize,
    pub active_filters: Vec<ActiveFilter>,
    pub sort: SortKey,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
