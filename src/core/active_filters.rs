use crate::models::{ActiveFilter, FilterConfig, FilterKind, GenderFilter, DEFAULT_MAX_BUDGET};

/// Summarize every constraint that differs from the defaults
///
/// Order: location, budget, gender, then one entry per lifestyle tag in the
/// order the tags were added.
pub fn active_filters(config: &FilterConfig) -> Vec<ActiveFilter> {
    let mut active = Vec::new();

    if !config.location_query.is_empty() {
        active.push(ActiveFilter {
            key: "location".to_string(),
            label: format!("Location: {}", config.location_query),
            kind: FilterKind::Location,
        });
    }

    if config.max_budget < DEFAULT_MAX_BUDGET || config.min_budget > 0 {
        active.push(ActiveFilter {
            key: "budget".to_string(),
            label: format!(
                "Budget: {} - {} EGP",
                format_thousands(config.min_budget),
                format_thousands(config.max_budget)
            ),
            kind: FilterKind::Budget,
        });
    }

    if let GenderFilter::Only(gender) = config.gender {
        active.push(ActiveFilter {
            key: "gender".to_string(),
            label: format!("Gender: {} only", gender),
            kind: FilterKind::Gender,
        });
    }

    for tag in &config.required_tags {
        active.push(ActiveFilter {
            key: format!("lifestyle-{}", tag),
            label: tag.clone(),
            kind: FilterKind::Lifestyle(tag.clone()),
        });
    }

    active
}

/// Reset exactly the constraint an active filter describes
pub fn clear_filter(config: &mut FilterConfig, filter: &ActiveFilter) {
    match &filter.kind {
        FilterKind::Location => config.location_query.clear(),
        FilterKind::Budget => {
            config.min_budget = 0;
            config.max_budget = DEFAULT_MAX_BUDGET;
        }
        FilterKind::Gender => config.gender = GenderFilter::Any,
        FilterKind::Lifestyle(tag) => {
            config.remove_tag(tag);
        }
    }
}

/// 4000 -> "4,000"
fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
