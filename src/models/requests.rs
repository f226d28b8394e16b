use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;
use crate::models::domain::{dedup_tags, FilterPatch, GenderFilter, ParseError, SortKey};

/// Errors turning an external search request into typed filters
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid field: {0}")]
    InvalidField(#[from] ParseError),
}

/// Search request as it arrives from a UI layer
///
/// Every field is optional; absent fields leave the current filters alone.
/// Inverted budget ranges are accepted and simply match nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub min_budget: Option<u32>,
    #[serde(default)]
    pub max_budget: Option<u32>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub lifestyle: Option<Vec<String>>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Typed form of a [`SearchRequest`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub patch: FilterPatch,
    /// `None` keeps whatever ordering the caller already has
    pub sort: Option<SortKey>,
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn into_query(self) -> Result<SearchQuery, RequestError> {
        self.validate()?;

        let gender = self
            .gender
            .as_deref()
            .map(str::parse::<GenderFilter>)
            .transpose()?;

        let patch = FilterPatch {
            gender,
            min_budget: self.min_budget,
            max_budget: self.max_budget,
            location_query: self.location,
            required_tags: self.lifestyle.map(dedup_tags),
        };

        Ok(SearchQuery {
            patch,
            sort: self.sort_by.map(SortKey::from),
            limit: self.limit,
        })
    }
}
