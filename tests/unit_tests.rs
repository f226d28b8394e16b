// Property tests for the filter/sort pipeline

use proptest::prelude::*;
use roommate_match::core::{filter_and_sort, filters::matches_filters};
use roommate_match::models::{dedup_tags, Candidate, FilterConfig, Gender, GenderFilter, SortKey};

const LOCATIONS: [&str; 5] = ["Maadi, Cairo", "Zamalek, Cairo", "Dokki, Giza", "New Cairo", "Heliopolis"];
const TAGS: [&str; 4] = ["Quiet", "Clean", "Non-smoker", "Night owl"];

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![
        Just(Gender::Male),
        Just(Gender::Female),
        Just(Gender::NonBinary),
        Just(Gender::Other),
    ]
}

fn gender_filter_strategy() -> impl Strategy<Value = GenderFilter> {
    prop_oneof![Just(GenderFilter::Any), gender_strategy().prop_map(GenderFilter::Only)]
}

fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::BestMatch),
        Just(SortKey::PriceLowToHigh),
        Just(SortKey::PriceHighToLow),
        Just(SortKey::Unrecognized),
    ]
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len())
        .prop_map(|tags| tags.into_iter().map(String::from).collect())
}

fn candidates_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    proptest::collection::vec(
        (gender_strategy(), 0u32..10_000, 0usize..LOCATIONS.len(), 0u8..=100, tags_strategy()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (gender, budget, loc, score, tags))| {
                Candidate::new(i.to_string(), gender, budget, LOCATIONS[loc], score).with_tags(tags)
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = FilterConfig> {
    (
        gender_filter_strategy(),
        0u32..10_000,
        0u32..10_000,
        prop_oneof![Just(String::new()), Just("cairo".to_string()), Just("ZAM".to_string()), Just("giza".to_string())],
        tags_strategy(),
    )
        .prop_map(|(gender, a, b, location_query, tags)| FilterConfig {
            gender,
            min_budget: a.min(b),
            max_budget: a.max(b),
            location_query,
            required_tags: dedup_tags(tags),
        })
}

proptest! {
    /// Repeated calls agree and leave their inputs untouched.
    #[test]
    fn pure_and_idempotent(
        candidates in candidates_strategy(),
        config in config_strategy(),
        sort in sort_strategy(),
    ) {
        let candidates_before = candidates.clone();
        let config_before = config.clone();

        let first = filter_and_sort(&candidates, &config, sort);
        let second = filter_and_sort(&candidates, &config, sort);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&candidates, &candidates_before);
        prop_assert_eq!(&config, &config_before);
    }

    /// Exactly the candidates satisfying every predicate come back, once each.
    #[test]
    fn result_is_exact_subset(
        candidates in candidates_strategy(),
        config in config_strategy(),
        sort in sort_strategy(),
    ) {
        let result = filter_and_sort(&candidates, &config, sort);
        prop_assert!(result.len() <= candidates.len());

        let mut result_ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        result_ids.sort_unstable();

        let mut expected: Vec<&str> = candidates
            .iter()
            .filter(|c| matches_filters(c, &config))
            .map(|c| c.id.as_str())
            .collect();
        expected.sort_unstable();

        prop_assert_eq!(result_ids, expected);
    }

    /// Output is ordered by the requested key; unknown keys keep input order.
    #[test]
    fn result_is_ordered(
        candidates in candidates_strategy(),
        config in config_strategy(),
        sort in sort_strategy(),
    ) {
        let result = filter_and_sort(&candidates, &config, sort);

        for pair in result.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match sort {
                SortKey::PriceLowToHigh => prop_assert!(a.budget <= b.budget),
                SortKey::PriceHighToLow => prop_assert!(a.budget >= b.budget),
                SortKey::BestMatch => prop_assert!(a.match_score >= b.match_score),
                SortKey::Unrecognized => {
                    let ia: usize = a.id.parse().unwrap();
                    let ib: usize = b.id.parse().unwrap();
                    prop_assert!(ia < ib);
                }
            }
        }
    }

    /// Ties keep their input order under every key.
    #[test]
    fn ties_are_stable(
        candidates in candidates_strategy(),
        sort in sort_strategy(),
    ) {
        let result = filter_and_sort(&candidates, &FilterConfig::default(), sort);

        for pair in result.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let tied = match sort {
                SortKey::PriceLowToHigh | SortKey::PriceHighToLow => a.budget == b.budget,
                SortKey::BestMatch => a.match_score == b.match_score,
                SortKey::Unrecognized => true,
            };
            if tied {
                let ia: usize = a.id.parse().unwrap();
                let ib: usize = b.id.parse().unwrap();
                prop_assert!(ia < ib);
            }
        }
    }

    /// Narrowing the budget or adding a tag never grows the result.
    #[test]
    fn narrowing_never_grows(
        candidates in candidates_strategy(),
        config in config_strategy(),
        shrink in 0u32..5_000,
        extra_tag in 0usize..TAGS.len(),
    ) {
        let base = filter_and_sort(&candidates, &config, SortKey::BestMatch).len();

        let mut narrower_budget = config.clone();
        narrower_budget.max_budget = narrower_budget.max_budget.saturating_sub(shrink);
        prop_assert!(filter_and_sort(&candidates, &narrower_budget, SortKey::BestMatch).len() <= base);

        let mut more_tags = config.clone();
        more_tags.add_tag(TAGS[extra_tag]);
        prop_assert!(filter_and_sort(&candidates, &more_tags, SortKey::BestMatch).len() <= base);

        let mut one_gender = config.clone();
        if one_gender.gender == GenderFilter::Any {
            one_gender.gender = GenderFilter::Only(Gender::Female);
        }
        prop_assert!(filter_and_sort(&candidates, &one_gender, SortKey::BestMatch).len() <= base);
    }

    /// An inverted budget range matches nothing, whatever else is set.
    #[test]
    fn inverted_range_is_empty(
        candidates in candidates_strategy(),
        config in config_strategy(),
        sort in sort_strategy(),
        low in 0u32..5_000,
        gap in 1u32..5_000,
    ) {
        let mut inverted = config;
        inverted.min_budget = low + gap;
        inverted.max_budget = low;

        prop_assert!(filter_and_sort(&candidates, &inverted, sort).is_empty());
    }
}

#[test]
fn test_inverted_range_from_six_to_three_thousand() {
    let candidates = vec![
        Candidate::new("1", Gender::Male, 3000, "Maadi", 80),
        Candidate::new("2", Gender::Female, 4500, "Zamalek", 95),
        Candidate::new("3", Gender::Other, 6000, "Dokki", 70),
    ];
    let config = FilterConfig { min_budget: 6000, max_budget: 3000, ..FilterConfig::default() };

    assert!(filter_and_sort(&candidates, &config, SortKey::BestMatch).is_empty());
}
