use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper end of the budget slider; the default `max_budget`
pub const DEFAULT_MAX_BUDGET: u32 = 9000;

/// Errors converting external strings into closed domain types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown gender: {0}")]
    UnknownGender(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "non-binary" | "nonbinary" => Ok(Gender::NonBinary),
            "other" => Ok(Gender::Other),
            _ => Err(ParseError::UnknownGender(s.to_string())),
        }
    }
}

/// A roommate listing as shown in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    pub gender: Gender,
    pub budget: u32,
    pub location: String,
    /// Compatibility percentage computed upstream
    #[serde(rename = "matchPercentage", alias = "matchScore")]
    pub match_score: u8,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "isOnline", default)]
    pub is_online: bool,
}

impl Candidate {
    /// Build a candidate carrying only the fields the filters look at
    pub fn new(
        id: impl Into<String>,
        gender: Gender,
        budget: u32,
        location: impl Into<String>,
        match_score: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            age: None,
            gender,
            budget,
            location: location.into(),
            match_score,
            image: None,
            occupation: None,
            tags: Vec::new(),
            bio: None,
            verified: false,
            is_online: false,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl AsRef<Candidate> for Candidate {
    fn as_ref(&self) -> &Candidate {
        self
    }
}

/// Gender constraint: everyone, or one specific gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GenderFilter {
    #[default]
    Any,
    Only(Gender),
}

impl GenderFilter {
    #[inline]
    pub fn admits(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::Any => true,
            GenderFilter::Only(wanted) => *wanted == gender,
        }
    }
}

impl FromStr for GenderFilter {
    type Err = ParseError;

    /// "Any" and the legacy "All" both mean no constraint
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(GenderFilter::Any),
            t if t.eq_ignore_ascii_case("any") || t.eq_ignore_ascii_case("all") => {
                Ok(GenderFilter::Any)
            }
            t => t.parse().map(GenderFilter::Only),
        }
    }
}

impl TryFrom<String> for GenderFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GenderFilter> for String {
    fn from(filter: GenderFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderFilter::Any => f.write_str("Any"),
            GenderFilter::Only(gender) => fmt::Display::fmt(gender, f),
        }
    }
}

/// Ordering applied to the filtered directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    BestMatch,
    PriceLowToHigh,
    PriceHighToLow,
    /// Produced for sort strings we do not know; keeps input order
    Unrecognized,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::BestMatch => "match",
            SortKey::PriceLowToHigh => "price-low",
            SortKey::PriceHighToLow => "price-high",
            SortKey::Unrecognized => "unrecognized",
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value.trim() {
            "match" | "best-match" | "BestMatch" => SortKey::BestMatch,
            "price-low" | "PriceLowToHigh" => SortKey::PriceLowToHigh,
            "price-high" | "PriceHighToLow" => SortKey::PriceHighToLow,
            _ => SortKey::Unrecognized,
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::from(value.as_str())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-chosen constraints over the directory
///
/// The engine only reads this; the owner mutates it between evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub gender: GenderFilter,
    pub min_budget: u32,
    pub max_budget: u32,
    /// Case-insensitive substring of the candidate's location; empty matches all
    #[serde(rename = "location")]
    pub location_query: String,
    /// Every tag listed here must be present on the candidate; kept in the
    /// order the tags were added, without duplicates
    #[serde(rename = "lifestyle", deserialize_with = "deserialize_tags")]
    pub required_tags: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gender: GenderFilter::Any,
            min_budget: 0,
            max_budget: DEFAULT_MAX_BUDGET,
            location_query: String::new(),
            required_tags: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Shallow merge: fields present in the patch replace ours
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(min) = patch.min_budget {
            self.min_budget = min;
        }
        if let Some(max) = patch.max_budget {
            self.max_budget = max;
        }
        if let Some(location) = patch.location_query {
            self.location_query = location;
        }
        if let Some(tags) = patch.required_tags {
            self.required_tags = dedup_tags(tags);
        }
    }

    pub fn requires_tag(&self, tag: &str) -> bool {
        self.required_tags.iter().any(|t| t == tag)
    }

    /// Append a required tag; returns false if it was already present
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.requires_tag(tag) {
            return false;
        }
        self.required_tags.push(tag.to_string());
        true
    }

    /// Drop a required tag; returns false if it was not present
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.required_tags.len();
        self.required_tags.retain(|t| t != tag);
        self.required_tags.len() != before
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Which constraint an [`ActiveFilter`] summarizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "trait", rename_all = "lowercase")]
pub enum FilterKind {
    Location,
    Budget,
    Gender,
    Lifestyle(String),
}

/// A non-default constraint, as shown in the filter pill row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub key: String,
    pub label: String,
    pub kind: FilterKind,
}

/// Partial update to a [`FilterConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    #[serde(default)]
    pub gender: Option<GenderFilter>,
    #[serde(default)]
    pub min_budget: Option<u32>,
    #[serde(default)]
    pub max_budget: Option<u32>,
    #[serde(rename = "location", default)]
    pub location_query: Option<String>,
    #[serde(rename = "lifestyle", default)]
    pub required_tags: Option<Vec<String>>,
}

impl FilterPatch {
    pub fn gender(gender: GenderFilter) -> Self {
        Self { gender: Some(gender), ..Self::default() }
    }

    pub fn budget(min: u32, max: u32) -> Self {
        Self { min_budget: Some(min), max_budget: Some(max), ..Self::default() }
    }

    pub fn location(query: impl Into<String>) -> Self {
        Self { location_query: Some(query.into()), ..Self::default() }
    }

    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_tags: Some(dedup_tags(tags.into_iter().map(Into::into))),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Keep the first occurrence of each tag, in order
pub fn dedup_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer).map(dedup_tags)
}

/// A patch that overwrites every field
impl From<FilterConfig> for FilterPatch {
    fn from(config: FilterConfig) -> Self {
        Self {
            gender: Some(config.gender),
            min_budget: Some(config.min_budget),
            max_budget: Some(config.max_budget),
            location_query: Some(config.location_query),
            required_tags: Some(config.required_tags),
        }
    }
}
