use crate::models::{Candidate, FilterConfig, GenderFilter};

/// Gender predicate: `Any`, or an exact match on the candidate's gender
#[inline]
pub fn matches_gender(candidate: &Candidate, filter: GenderFilter) -> bool {
    filter.admits(candidate.gender)
}

/// Budget predicate, inclusive at both ends
///
/// An inverted range (`min > max`) admits nobody.
#[inline]
pub fn matches_budget(candidate: &Candidate, min_budget: u32, max_budget: u32) -> bool {
    candidate.budget >= min_budget && candidate.budget <= max_budget
}

/// Location predicate: case-insensitive substring match
#[inline]
pub fn matches_location(candidate: &Candidate, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    candidate
        .location
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Lifestyle predicate: the candidate must carry every required tag
#[inline]
pub fn matches_lifestyle<'a, I>(candidate: &Candidate, required_tags: I) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    required_tags.into_iter().all(|tag| candidate.has_tag(tag))
}

/// All four predicate families at once
#[inline]
pub fn matches_filters(candidate: &Candidate, config: &FilterConfig) -> bool {
    matches_gender(candidate, config.gender)
        && matches_budget(candidate, config.min_budget, config.max_budget)
        && matches_location(candidate, &config.location_query)
        && matches_lifestyle(candidate, &config.required_tags)
}
