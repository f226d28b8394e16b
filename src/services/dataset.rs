use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use crate::models::Candidate;

/// Errors that can occur while loading a candidate dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate candidate id: {0}")]
    DuplicateId(String),

    #[error("Match score {score} out of range for candidate {id}")]
    InvalidMatchScore { id: String, score: u8 },
}

/// Read a JSON array of candidates from disk
pub fn load_candidates<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, DatasetError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let candidates = parse_candidates(&raw)?;
    tracing::info!("Loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

/// Parse and check a JSON array of candidates
///
/// Ids must be unique and match scores must lie in 0..=100.
pub fn parse_candidates(raw: &str) -> Result<Vec<Candidate>, DatasetError> {
    let candidates: Vec<Candidate> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in &candidates {
        if !seen.insert(candidate.id.as_str()) {
            return Err(DatasetError::DuplicateId(candidate.id.clone()));
        }
        if candidate.match_score > 100 {
            return Err(DatasetError::InvalidMatchScore {
                id: candidate.id.clone(),
                score: candidate.match_score,
            });
        }
    }

    Ok(candidates)
}
