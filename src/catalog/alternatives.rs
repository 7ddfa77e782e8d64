//! Alternative suggestions for a missed or ineligible opportunity.

use crate::catalog::Opportunity;

/// Up to `MAX_ALTERNATIVES` other opportunities sharing the missed one's
/// category and education level, excluding itself, in input order. A
/// filtered-and-capped selection, not a ranking.
pub const MAX_ALTERNATIVES: usize = 3;

pub fn suggest_alternatives<'a>(
    missed: &Opportunity,
    all: &'a [Opportunity],
) -> Vec<&'a Opportunity> {
    all.iter()
        .filter(|opp| {
            opp.category == missed.category
                && opp.education_level == missed.education_level
                && opp.id != missed.id
        })
        .take(MAX_ALTERNATIVES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_opportunity;

    #[test]
    fn suggests_same_category_and_level_excluding_self() {
        let missed = sample_opportunity("missed", "2026-01-01");
        let mut other_category = sample_opportunity("other", "2026-02-01");
        other_category.category = "internship".to_string();
        let all = vec![
            missed.clone(),
            sample_opportunity("a", "2026-02-01"),
            other_category,
            sample_opportunity("b", "2026-03-01"),
        ];

        let ids: Vec<&str> = suggest_alternatives(&missed, &all)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn caps_at_three_in_input_order() {
        let missed = sample_opportunity("missed", "2026-01-01");
        let all: Vec<_> = ["d", "c", "b", "a"]
            .iter()
            .map(|id| sample_opportunity(id, "2026-02-01"))
            .collect();

        let ids: Vec<&str> = suggest_alternatives(&missed, &all)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        // Input order preserved, fourth candidate dropped
        assert_eq!(ids, vec!["d", "c", "b"]);
    }

    #[test]
    fn no_candidates_yields_empty() {
        let missed = sample_opportunity("missed", "2026-01-01");
        assert!(suggest_alternatives(&missed, &[missed.clone()]).is_empty());
    }
}
