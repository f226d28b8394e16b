use std::cmp::Ordering;
use crate::models::{Candidate, SortKey};

/// Compare two candidates under a sort key
///
/// `Unrecognized` treats everything as equal so a stable sort keeps input order.
#[inline]
pub fn compare_candidates(a: &Candidate, b: &Candidate, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::PriceLowToHigh => a.budget.cmp(&b.budget),
        SortKey::PriceHighToLow => b.budget.cmp(&a.budget),
        SortKey::BestMatch => b.match_score.cmp(&a.match_score),
        SortKey::Unrecognized => Ordering::Equal,
    }
}

/// Order candidates in place
///
/// Stable: candidates with equal keys stay in their input order.
pub fn sort_candidates<C>(candidates: &mut [C], sort_key: SortKey)
where
    C: AsRef<Candidate>,
{
    sort_candidates_by(candidates, sort_key, |c| c.as_ref());
}

/// Order arbitrary items that each carry a candidate
pub fn sort_candidates_by<T, F>(items: &mut [T], sort_key: SortKey, candidate_of: F)
where
    F: Fn(&T) -> &Candidate,
{
    if sort_key == SortKey::Unrecognized {
        return;
    }

    items.sort_by(|a, b| compare_candidates(candidate_of(a), candidate_of(b), sort_key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn ids(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.id.as_str()).collect()
    }

    fn create_candidates() -> Vec<Candidate> {
        vec![
            Candidate::new("a", Gender::Male, 5000, "Maadi", 70),
            Candidate::new("b", Gender::Female, 3000, "Zamalek", 90),
            Candidate::new("c", Gender::Male, 5000, "Dokki", 90),
            Candidate::new("d", Gender::Other, 2000, "Heliopolis", 60),
        ]
    }

    #[test]
    fn test_price_low_to_high_is_stable() {
        let mut candidates = create_candidates();
        sort_candidates(&mut candidates, SortKey::PriceLowToHigh);
        assert_eq!(ids(&candidates), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_price_high_to_low_is_stable() {
        let mut candidates = create_candidates();
        sort_candidates(&mut candidates, SortKey::PriceHighToLow);
        assert_eq!(ids(&candidates), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_best_match_is_stable() {
        let mut candidates = create_candidates();
        sort_candidates(&mut candidates, SortKey::BestMatch);
        assert_eq!(ids(&candidates), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_unrecognized_keeps_input_order() {
        let mut candidates = create_candidates();
        sort_candidates(&mut candidates, SortKey::Unrecognized);
        assert_eq!(ids(&candidates), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sorts_references() {
        let candidates = create_candidates();
        let mut refs: Vec<&Candidate> = candidates.iter().collect();
        sort_candidates(&mut refs, SortKey::PriceLowToHigh);
        assert_eq!(refs[0].id, "d");
    }
}
