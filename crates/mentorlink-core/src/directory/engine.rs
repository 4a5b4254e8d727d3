//! Search and filter operations over the mentor collection.
//!
//! Both operations are pure functions: they clone matching records into a
//! new collection, preserve the input order, and never mutate a mentor.

use super::filters::SearchFilters;
use crate::mentor::Mentor;

/// Free-text search over the mentor collection.
///
/// A blank query returns the full collection unchanged. Otherwise the query
/// is matched case-insensitively as a substring of the mentor's name, role,
/// company, any tag, or any expertise entry; a mentor matches if ANY of
/// those fields contains the query.
///
/// There is no relevance ranking: results keep the original collection
/// order. This is a known limitation carried over deliberately - callers
/// rely on the ordering being stable.
pub fn search_mentors(query: &str, mentors: &[Mentor]) -> Vec<Mentor> {
    let query = query.trim();
    if query.is_empty() {
        return mentors.to_vec();
    }

    let query = query.to_lowercase();
    mentors
        .iter()
        .filter(|mentor| {
            mentor.name.to_lowercase().contains(&query)
                || mentor.role.to_lowercase().contains(&query)
                || mentor.company.to_lowercase().contains(&query)
                || mentor
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query))
                || mentor
                    .expertise
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Applies the structured filter set to a mentor collection.
///
/// The filters compose as a conjunction: a mentor stays in the result only
/// if every active criterion accepts it. Criteria left at their defaults
/// are vacuously true, so an empty filter set is the identity. The
/// operation is idempotent and order-preserving; an empty result is a
/// valid, displayable state.
pub fn filter_mentors(mentors: &[Mentor], filters: &SearchFilters) -> Vec<Mentor> {
    mentors
        .iter()
        .filter(|mentor| matches_filters(mentor, filters))
        .cloned()
        .collect()
}

fn matches_filters(mentor: &Mentor, filters: &SearchFilters) -> bool {
    if !filters.expertise.is_empty() {
        let has_expertise = filters.expertise.iter().any(|skill| {
            let skill = skill.to_lowercase();
            mentor
                .expertise
                .iter()
                .any(|mentor_skill| mentor_skill.to_lowercase().contains(&skill))
        });
        if !has_expertise {
            return false;
        }
    }

    if filters.rating > 0.0 && mentor.rating < filters.rating {
        return false;
    }

    let (min, max) = filters.price_range;
    if mentor.hourly_rate < min || mentor.hourly_rate > max {
        return false;
    }

    if !filters.availability.is_empty() {
        let has_availability = filters.availability.iter().any(|slot| {
            mentor
                .availability
                .iter()
                .any(|mentor_slot| mentor_slot.contains(slot.as_str()))
        });
        if !has_availability {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mentor::seeded_mentors;

    fn ids(mentors: &[Mentor]) -> Vec<&str> {
        mentors.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let all = seeded_mentors();
        assert_eq!(search_mentors("", all), all.to_vec());
        assert_eq!(search_mentors("   ", all), all.to_vec());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let all = seeded_mentors();

        // Tag match, lowercased query against "React"
        let result = search_mentors("react", all);
        assert_eq!(ids(&result), vec!["1"]);

        // Company match hits two mentors, in seeded order
        let result = search_mentors("네이버", all);
        assert_eq!(ids(&result), vec!["1", "6"]);

        // Role match
        let result = search_mentors("프론트엔드", all);
        assert_eq!(ids(&result), vec!["1"]);

        // Expertise match
        let result = search_mentors("figma", all);
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_search_no_match_yields_empty_result() {
        let result = search_mentors("없는검색어", seeded_mentors());
        assert!(result.is_empty());
    }

    #[test]
    fn test_search_results_appear_exactly_once() {
        // "데이터" appears in mentor 2's expertise (데이터 분석) and twice in
        // mentor 6's fields; each mentor must still appear exactly once.
        let result = search_mentors("데이터", seeded_mentors());
        assert_eq!(ids(&result), vec!["2", "5", "6"]);
    }

    #[test]
    fn test_empty_filter_set_is_identity() {
        let all = seeded_mentors();
        assert_eq!(filter_mentors(all, &SearchFilters::default()), all.to_vec());
    }

    #[test]
    fn test_rating_filter_on_seed_data() {
        let filters = SearchFilters {
            rating: 4.8,
            ..SearchFilters::default()
        };
        let result = filter_mentors(seeded_mentors(), &filters);
        assert_eq!(ids(&result), vec!["1", "2", "3", "5", "6"]);
    }

    #[test]
    fn test_price_filter_on_seed_data() {
        let filters = SearchFilters {
            price_range: (0, 80_000),
            ..SearchFilters::default()
        };
        let result = filter_mentors(seeded_mentors(), &filters);
        assert_eq!(ids(&result), vec!["1", "4"]);
    }

    #[test]
    fn test_expertise_filter_any_any_match() {
        let filters = SearchFilters {
            expertise: vec!["spring".to_string(), "figma".to_string()],
            ..SearchFilters::default()
        };
        let result = filter_mentors(seeded_mentors(), &filters);
        assert_eq!(ids(&result), vec!["4", "5"]);
    }

    #[test]
    fn test_availability_filter_substring_match() {
        // "주말" matches "주말", "주말 오전" and "주말 오후"
        let filters = SearchFilters {
            availability: vec!["주말".to_string()],
            ..SearchFilters::default()
        };
        let result = filter_mentors(seeded_mentors(), &filters);
        assert_eq!(ids(&result), vec!["1", "2", "4", "5", "6"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filters = SearchFilters {
            rating: 4.8,
            price_range: (0, 90_000),
            ..SearchFilters::default()
        };
        let once = filter_mentors(seeded_mentors(), &filters);
        let twice = filter_mentors(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_then_filter_composition() {
        let all = seeded_mentors();
        let filters = SearchFilters {
            rating: 4.9,
            ..SearchFilters::default()
        };
        let result = filter_mentors(&search_mentors("네이버", all), &filters);
        assert_eq!(ids(&result), vec!["1", "6"]);

        // Clearing the query must not reset the filters and vice versa
        let result = filter_mentors(&search_mentors("", all), &filters);
        assert_eq!(ids(&result), vec!["1", "3", "6"]);
    }

    #[test]
    fn test_conjunction_can_produce_empty_result() {
        let filters = SearchFilters {
            rating: 4.9,
            price_range: (0, 70_000),
            ..SearchFilters::default()
        };
        let result = filter_mentors(seeded_mentors(), &filters);
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_record_is_mutated() {
        let all = seeded_mentors().to_vec();
        let _ = filter_mentors(
            &search_mentors("멘토", &all),
            &SearchFilters {
                rating: 4.0,
                ..SearchFilters::default()
            },
        );
        assert_eq!(all, seeded_mentors().to_vec());
    }
}
