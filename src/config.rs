use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;
use std::path::Path;
use crate::models::{dedup_tags, FilterConfig, GenderFilter, SortKey, DEFAULT_MAX_BUDGET};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

fn default_dataset_path() -> String { "data/roommates.json".to_string() }

/// Initial filters and ordering for a search run
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchSettings {
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Same bounds a search request is held to
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default)]
    pub min_budget: u32,
    #[serde(default = "default_max_budget")]
    pub max_budget: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub lifestyle: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            limit: None,
            gender: default_gender(),
            min_budget: 0,
            max_budget: default_max_budget(),
            location: String::new(),
            lifestyle: Vec::new(),
        }
    }
}

fn default_sort() -> String { "match".to_string() }
fn default_gender() -> String { "Any".to_string() }
fn default_max_budget() -> u32 { DEFAULT_MAX_BUDGET }

impl SearchSettings {
    /// Typed filters described by these settings
    pub fn filters(&self) -> Result<FilterConfig, ConfigError> {
        let gender: GenderFilter = self
            .gender
            .parse()
            .map_err(|e| ConfigError::Message(format!("search.gender: {}", e)))?;

        Ok(FilterConfig {
            gender,
            min_budget: self.min_budget,
            max_budget: self.max_budget,
            location_query: self.location.clone(),
            required_tags: dedup_tags(self.lifestyle.iter().cloned()),
        })
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::from(self.sort.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Memoized searches kept; 0 disables the cache
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { capacity: default_cache_capacity() }
    }
}

fn default_cache_capacity() -> usize { 64 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Default values in the structs
    /// 2. config/default.toml
    /// 3. config/local.toml
    /// 4. Environment variables prefixed with ROOMMATE, e.g.
    ///    `ROOMMATE__SEARCH__MAX_BUDGET=4000` -> search.max_budget
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        settings.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        settings.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.search
            .validate()
            .map_err(|e| ConfigError::Message(format!("search: {}", e)))?;
        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ROOMMATE")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("search.lifestyle")
        .try_parsing(true)
}
