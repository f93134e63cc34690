//! Property tests for list filtering and derived figures

use proptest::prelude::*;
use talkeriq_core::filter::{ListQuery, Searchable, WILDCARD};
use talkeriq_core::fixtures;
use talkeriq_core::metrics::{count_where, PhoneNumberStats};
use talkeriq_core::types::{AgentStatus, KnowledgeType, NumberStatus, NumberType, PhoneNumber};

fn haystack<R: Searchable>(record: &R) -> String {
    record
        .search_fields()
        .iter()
        .map(|field| field.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n")
}

fn search_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 +()-]{0,6}",
        Just("sales".to_string()),
        Just("  Customer ".to_string()),
        Just("555".to_string()),
    ]
}

fn number_type_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(WILDCARD.to_string()),
        prop::sample::select(NumberType::ALL.to_vec()).prop_map(|t| t.label().to_string()),
        prop::sample::select(NumberType::ALL.to_vec()).prop_map(|t| t.label().to_uppercase()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn test_wildcard_search_is_substring_match(search in search_text()) {
        let query = ListQuery::new(&search, WILDCARD);
        let needle = search.trim().to_lowercase();

        for agent in fixtures::voice_agents() {
            let expected = needle.is_empty() || haystack(agent).contains(&needle);
            prop_assert_eq!(query.matches(agent), expected);
        }
    }

    #[test]
    fn test_category_only_is_label_equality(token in number_type_token()) {
        let query = ListQuery::new("", &token);

        for number in fixtures::phone_numbers() {
            let expected = token.eq_ignore_ascii_case(WILDCARD)
                || number.number_type.label().eq_ignore_ascii_case(&token);
            prop_assert_eq!(query.matches(number), expected);
        }
    }

    #[test]
    fn test_filtering_is_idempotent(search in search_text(), token in number_type_token()) {
        let query = ListQuery::new(&search, &token);

        let once: Vec<PhoneNumber> = query
            .apply(fixtures::phone_numbers())
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<PhoneNumber> = query.apply(&once).into_iter().cloned().collect();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_results_are_an_ordered_subset(search in search_text()) {
        let all = fixtures::knowledge_items();
        let found = ListQuery::new(&search, WILDCARD).apply(all);

        let positions: Vec<usize> = found
            .iter()
            .filter_map(|item| all.iter().position(|candidate| candidate.id == item.id))
            .collect();

        prop_assert_eq!(positions.len(), found.len());
        prop_assert!(positions.windows(2).all(|pair| pair.first() < pair.last()));
    }

    #[test]
    fn test_search_is_case_insensitive(search in "[a-z]{1,5}") {
        let lower = ListQuery::new(&search, WILDCARD);
        let upper = ListQuery::new(search.to_uppercase(), WILDCARD);

        prop_assert_eq!(
            lower.apply(fixtures::knowledge_items()).len(),
            upper.apply(fixtures::knowledge_items()).len()
        );
    }
}

#[test]
fn test_counts_equal_matching_subset() {
    let agents = fixtures::voice_agents();
    for status in AgentStatus::ALL {
        let filtered = ListQuery::new("", status.label()).apply(agents);
        assert_eq!(filtered.len(), count_where(agents, |a| a.status == status));
    }

    let items = fixtures::knowledge_items();
    for kind in KnowledgeType::ALL {
        let filtered = ListQuery::new("", kind.label()).apply(items);
        assert_eq!(filtered.len(), count_where(items, |i| i.item_type == kind));
    }
}

#[test]
fn test_phone_stats_ignore_the_active_filter() {
    let numbers = fixtures::phone_numbers();
    let stats = PhoneNumberStats::from_records(numbers);

    assert_eq!(
        stats.active_numbers,
        count_where(numbers, |n| n.status == NumberStatus::Active)
    );
    assert!(ListQuery::new("zzz", WILDCARD).apply(numbers).is_empty());
    assert_eq!(PhoneNumberStats::from_records(numbers), stats);
}
