use crate::core::{filters::matches_filters, sorting::sort_candidates_by};
use crate::models::{Candidate, FilterConfig, SortKey};

/// Result of one directory evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub matches: Vec<Candidate>,
    pub total_candidates: usize,
}

/// Filter and order a candidate list
///
/// A candidate survives when all four predicates hold (gender, budget,
/// location, lifestyle tags). Survivors are then ordered by `sort_key` with a
/// stable sort, so ties keep their input order. Neither input is modified and
/// the result never contains more candidates than the input.
///
/// There is no failure channel: an inverted budget range or a query that
/// nothing satisfies yields an empty vector.
pub fn filter_and_sort(
    candidates: &[Candidate],
    config: &FilterConfig,
    sort_key: SortKey,
) -> Vec<Candidate> {
    filter_and_sort_refs(candidates, config, sort_key)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter_and_sort`]
pub fn filter_and_sort_refs<'a>(
    candidates: &'a [Candidate],
    config: &FilterConfig,
    sort_key: SortKey,
) -> Vec<&'a Candidate> {
    filter_and_sort_indices(candidates, config, sort_key)
        .into_iter()
        .map(|idx| &candidates[idx])
        .collect()
}

/// Positions into `candidates` of the filtered, ordered view
pub fn filter_and_sort_indices(
    candidates: &[Candidate],
    config: &FilterConfig,
    sort_key: SortKey,
) -> Vec<usize> {
    // Same result as matches_budget gives for every candidate when min > max,
    // computed without walking the list
    if config.min_budget > config.max_budget {
        return Vec::new();
    }

    let mut survivors: Vec<(usize, &Candidate)> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| matches_filters(candidate, config))
        .collect();

    sort_candidates_by(&mut survivors, sort_key, |(_, candidate)| *candidate);

    survivors.into_iter().map(|(idx, _)| idx).collect()
}

/// Stateless wrapper around [`filter_and_sort`]
///
/// Holds nothing but is kept as a value so callers can pass it around the
/// same way they would a configured matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchFilterEngine;

impl MatchFilterEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the directory and report how many candidates were considered
    pub fn evaluate(
        &self,
        candidates: &[Candidate],
        config: &FilterConfig,
        sort_key: SortKey,
    ) -> SearchResult {
        SearchResult {
            matches: filter_and_sort(candidates, config, sort_key),
            total_candidates: candidates.len(),
        }
    }
}
