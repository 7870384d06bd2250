//! The pure derivation behind [`FilterState`](crate::FilterState).
//!
//! Everything here is a function of `(data, key, query)` alone. The stateful
//! adapter only decides *when* to call it.

use crate::normalize::NormalizedKey;
use crate::selector::FieldSelector;

/// Which items of a list survive a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every item, in order. Produced for the empty query.
    All,
    /// Positions of matching items, strictly increasing.
    Indices(Vec<usize>),
}

impl Selection {
    /// Number of selected items out of `total`.
    pub fn len(&self, total: usize) -> usize {
        match self {
            Selection::All => total,
            Selection::Indices(indices) => indices.len(),
        }
    }

    /// Returns `true` if nothing out of `total` items is selected.
    pub fn is_empty(&self, total: usize) -> bool {
        self.len(total) == 0
    }
}

/// Computes the selection for `query` over `data`.
///
/// The empty query selects everything without normalizing anything. Any
/// other query is normalized once and tested for containment against the
/// normalized, text-coerced field of every item.
pub fn select<T>(data: &[T], key: &FieldSelector<T>, query: &str) -> Selection {
    if query.is_empty() {
        return Selection::All;
    }

    let needle = NormalizedKey::new(query);
    let indices: Vec<usize> = data
        .iter()
        .enumerate()
        .filter(|(_, item)| key.key(item).contains(&needle))
        .map(|(i, _)| i)
        .collect();

    tracing::debug!(
        field = key.name(),
        items = data.len(),
        matched = indices.len(),
        "recomputed filtered view"
    );
    Selection::Indices(indices)
}

/// Filters `data` by `query`, preserving order.
///
/// # Example
///
/// ```
/// use sift::{filter, FieldSelector};
///
/// let names: Vec<String> = ["Apple", "Banana", "Pineapple"].map(String::from).to_vec();
/// let key = FieldSelector::<String>::field("name");
///
/// let hits: Vec<&String> = filter(&names, &key, "APP");
/// assert_eq!(hits, ["Apple", "Pineapple"]);
/// ```
pub fn filter<'a, T>(data: &'a [T], key: &FieldSelector<T>, query: &str) -> Vec<&'a T> {
    match select(data, key, query) {
        Selection::All => data.iter().collect(),
        Selection::Indices(indices) => indices.into_iter().map(|i| &data[i]).collect(),
    }
}

/// The fallback to surface for a query and its selection.
///
/// Present exactly when the query is non-empty and nothing matched.
pub fn indicator<'f, F>(
    query: &str,
    selection: &Selection,
    total: usize,
    fallback: &'f F,
) -> Option<&'f F> {
    if !query.is_empty() && selection.is_empty(total) {
        Some(fallback)
    } else {
        None
    }
}
