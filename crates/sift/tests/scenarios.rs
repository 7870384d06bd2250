//! End-to-end filtering scenarios over a small record list.

use sift::{FieldSelector, FilterState, RecomputePolicy, Searchable, Value};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: String,
}

impl Searchable for Item {
    fn search_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::String(&self.name),
            _ => Value::None,
        }
    }
}

#[derive(Debug, PartialEq)]
struct Fallback(&'static str);

fn items() -> Vec<Item> {
    ["Apple", "Banana", "Orange", "Pineapple", "Café", "Niño"]
        .into_iter()
        .map(|name| Item {
            name: name.to_string(),
        })
        .collect()
}

fn state() -> FilterState<Item, Fallback> {
    FilterState::new(items(), FieldSelector::field("name"), Fallback("No results"))
}

fn names<F>(state: &FilterState<Item, F>) -> Vec<&str> {
    state
        .filtered_data()
        .iter()
        .map(|item| item.name.as_str())
        .collect()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn substring_app() {
    let mut state = state();
    state.on_query_change("app");
    assert_eq!(names(&state), ["Apple", "Pineapple"]);
    assert_eq!(state.indicator(), None);
}

#[test]
fn uppercase_query() {
    let mut state = state();
    state.on_query_change("BANANA");
    assert_eq!(names(&state), ["Banana"]);
}

#[test]
fn accent_insensitive() {
    let mut state = state();
    state.on_query_change("cafe");
    assert_eq!(names(&state), ["Café"]);

    state.on_query_change("nino");
    assert_eq!(names(&state), ["Niño"]);
}

#[test]
fn no_match_shows_fallback() {
    let mut state = state();
    state.on_query_change("xyz");
    assert!(state.filtered_data().is_empty());
    assert_eq!(state.indicator(), Some(&Fallback("No results")));
}

#[test]
fn empty_data_with_query_shows_fallback() {
    let mut state: FilterState<Item, Fallback> =
        FilterState::new(Vec::new(), FieldSelector::field("name"), Fallback("Empty"));
    state.on_query_change("a");
    assert!(state.filtered_data().is_empty());
    assert_eq!(state.indicator(), Some(&Fallback("Empty")));
}

// ============================================================================
// Query and data lifecycle
// ============================================================================

#[test]
fn empty_query_returns_data_verbatim() {
    let state = state();
    let all: Vec<&Item> = state.filtered_data().to_vec();
    let expected = items();
    assert_eq!(all, expected.iter().collect::<Vec<_>>());
    assert_eq!(state.indicator(), None);
}

#[test]
fn clearing_query_after_no_match_hides_fallback() {
    let mut state = state();
    state.on_query_change("xyz");
    assert!(state.indicator().is_some());
    state.on_query_change("");
    assert_eq!(state.indicator(), None);
    assert_eq!(state.filtered_data().len(), 6);
}

#[test]
fn punctuation_in_query_is_ignored() {
    let mut state = state();
    state.on_query_change("¿Piña-apple?");
    // "pinaapple" is not a substring of "pineapple"
    assert!(state.filtered_data().is_empty());

    state.on_query_change("pine-apple!");
    assert_eq!(names(&state), ["Pineapple"]);
}

#[test]
fn whitespace_only_query_matches_everything() {
    let mut state = state();
    state.on_query_change("   ");
    assert_eq!(state.filtered_data().len(), 6);
    assert_eq!(state.indicator(), None);
}

#[test]
fn new_data_is_picked_up() {
    let mut state = state();
    state.on_query_change("berry");
    assert!(state.indicator().is_some());

    let mut more = items();
    more.push(Item {
        name: "Blueberry".to_string(),
    });
    state.set_data(more);

    assert_eq!(names(&state), ["Blueberry"]);
    assert_eq!(state.indicator(), None);
}

#[test]
fn missing_field_only_matches_empty_query() {
    let mut state = FilterState::new(items(), FieldSelector::field("colour"), "none");
    assert_eq!(state.filtered_data().len(), 6);

    state.on_query_change("undefined");
    assert!(state.filtered_data().is_empty());
    assert_eq!(state.indicator(), Some(&"none"));
}

#[test]
fn numeric_fields_are_searchable() {
    #[derive(Debug)]
    struct Order {
        id: u64,
        total: f64,
    }

    fn accessor<'a>(order: &'a Order, field: &str) -> Value<'a> {
        match field {
            "id" => Value::from(order.id),
            "total" => Value::from(order.total),
            _ => Value::None,
        }
    }

    let orders = vec![
        Order { id: 1042, total: 12.5 },
        Order { id: 77, total: 3.0 },
        Order { id: 4210, total: 100.25 },
    ];

    let mut state = FilterState::new(orders, FieldSelector::new("id", accessor), ());
    state.on_query_change("42");
    let ids: Vec<u64> = state.filtered_data().iter().map(|o| o.id).collect();
    assert_eq!(ids, [1042, 4210]);

    state.set_key(FieldSelector::new("total", accessor));
    state.on_query_change("3");
    let ids: Vec<u64> = state.filtered_data().iter().map(|o| o.id).collect();
    assert_eq!(ids, [77]);
}

#[test]
fn eager_and_memoized_agree_on_scenarios() {
    let mut memo = state();
    let mut eager = FilterState::builder(items(), FieldSelector::field("name"))
        .fallback(Fallback("No results"))
        .policy(RecomputePolicy::Eager)
        .build();

    for query in ["", "app", "BANANA", "cafe", "nino", "xyz", "a", ""] {
        memo.on_query_change(query);
        eager.on_query_change(query);
        assert_eq!(names(&memo), names(&eager), "query {query:?}");
        assert_eq!(memo.indicator(), eager.indicator(), "query {query:?}");
    }
}

#[test]
fn snapshot_matches_individual_reads() {
    let mut state = state();
    state.on_query_change("an");
    let snapshot = state.snapshot();
    assert_eq!(snapshot.query, state.query());
    assert_eq!(snapshot.items.to_vec(), state.filtered_data().to_vec());
    assert_eq!(snapshot.indicator, state.indicator());
}
