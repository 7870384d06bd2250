//! The live filter adapter a host binds its search field to.
//!
//! [`FilterState`] owns the raw query text and the current inputs, and derives
//! the filtered view and "no results" indicator from them on demand. The
//! derived view is never stored apart from its inputs: every setter either
//! leaves the cache untouched (the input did not change) or drops it.

use std::borrow::Cow;
use std::cell::OnceCell;
use std::iter::FusedIterator;
use std::ops::Range;
use std::slice;

use crate::filter::{self, Selection};
use crate::selector::FieldSelector;

/// When the derived view is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecomputePolicy {
    /// Cache the view until `data`, `key` or `query` changes by value.
    #[default]
    Memoized,
    /// Rescan on every read.
    Eager,
}

/// Stateful search adapter over an owned list of records.
///
/// # Example
///
/// ```
/// use sift::{FieldSelector, FilterState};
///
/// let fruits: Vec<String> = ["Apple", "Banana", "Café"].map(String::from).to_vec();
/// let mut state = FilterState::new(fruits, FieldSelector::field("name"), "No results");
///
/// assert_eq!(state.filtered_data().len(), 3);
///
/// state.on_query_change("CAFE");
/// assert_eq!(state.query(), "CAFE");
/// assert_eq!(state.filtered_data().to_vec(), ["Café"]);
/// assert_eq!(state.indicator(), None);
///
/// state.on_query_change("xyz");
/// assert!(state.filtered_data().is_empty());
/// assert_eq!(state.indicator(), Some(&"No results"));
/// ```
#[derive(Debug)]
pub struct FilterState<T, F = ()> {
    data: Vec<T>,
    key: FieldSelector<T>,
    fallback: F,
    query: String,
    policy: RecomputePolicy,
    cache: OnceCell<Selection>,
}

impl<T> FilterState<T> {
    /// Starts a builder. The fallback defaults to `()`.
    pub fn builder(data: Vec<T>, key: FieldSelector<T>) -> FilterStateBuilder<T> {
        FilterStateBuilder {
            data,
            key,
            fallback: (),
            query: String::new(),
            policy: RecomputePolicy::default(),
        }
    }
}

impl<T, F> FilterState<T, F> {
    /// Creates a memoized filter with an empty query.
    pub fn new(data: Vec<T>, key: FieldSelector<T>, fallback: F) -> Self {
        FilterState::builder(data, key).fallback(fallback).build()
    }

    // ========================================================================
    // Host-facing outputs
    // ========================================================================

    /// The raw query text, exactly as last received.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The items matching the current query, in their original order.
    pub fn filtered_data(&self) -> FilteredView<'_, T> {
        FilteredView {
            data: &self.data,
            selection: self.selection(),
        }
    }

    /// The fallback when the query is non-empty and nothing matched.
    pub fn indicator(&self) -> Option<&F> {
        let selection = self.selection();
        filter::indicator(&self.query, &selection, self.data.len(), &self.fallback)
    }

    /// Query, filtered items and indicator from a single derivation.
    pub fn snapshot(&self) -> FilterSnapshot<'_, T, F> {
        let selection = self.selection();
        let indicator = filter::indicator(&self.query, &selection, self.data.len(), &self.fallback);
        FilterSnapshot {
            query: &self.query,
            items: FilteredView {
                data: &self.data,
                selection,
            },
            indicator,
        }
    }

    /// Number of items in the filtered view.
    pub fn match_count(&self) -> usize {
        self.selection().len(self.data.len())
    }

    /// Returns `true` if a non-empty query is narrowing the view.
    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
    }

    // ========================================================================
    // Host-facing inputs
    // ========================================================================

    /// Records new raw query text from the search field.
    ///
    /// The text is stored verbatim so it can be echoed back to the field
    /// unchanged; only matching works on its normalized form.
    pub fn on_query_change(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        if raw != self.query {
            self.query = raw;
            self.invalidate("query");
        }
    }

    /// A handler closure for hosts that wire callbacks rather than methods.
    pub fn query_handler(&mut self) -> impl FnMut(&str) + '_ {
        move |raw: &str| self.on_query_change(raw)
    }

    /// Resets the query to empty, showing every item.
    pub fn clear_query(&mut self) {
        self.on_query_change(String::new());
    }

    /// Supplies a new record list. Equal lists keep the cached view.
    pub fn set_data(&mut self, data: Vec<T>)
    where
        T: PartialEq,
    {
        if data != self.data {
            self.data = data;
            self.invalidate("data");
        }
    }

    /// Supplies a new record list without comparing it to the current one.
    pub fn replace_data(&mut self, data: Vec<T>) -> Vec<T> {
        let previous = std::mem::replace(&mut self.data, data);
        self.invalidate("data");
        previous
    }

    /// Selects a different field. An equal selector keeps the cached view.
    pub fn set_key(&mut self, key: FieldSelector<T>) {
        if key != self.key {
            self.key = key;
            self.invalidate("key");
        }
    }

    /// Replaces the fallback indicator.
    ///
    /// Which items match does not depend on the fallback, so the cached view
    /// survives; [`FilterState::indicator`] reads the new value immediately.
    pub fn set_fallback(&mut self, fallback: F) -> F {
        std::mem::replace(&mut self.fallback, fallback)
    }

    // ========================================================================
    // Current inputs
    // ========================================================================

    /// The full, unfiltered record list.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The current field selector.
    pub fn key(&self) -> &FieldSelector<T> {
        &self.key
    }

    /// The current fallback indicator.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    /// The recompute policy chosen at construction.
    pub fn policy(&self) -> RecomputePolicy {
        self.policy
    }

    /// Consumes the state, returning the record list.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    // ========================================================================
    // Derivation
    // ========================================================================

    fn selection(&self) -> Cow<'_, Selection> {
        match self.policy {
            RecomputePolicy::Eager => Cow::Owned(self.derive()),
            RecomputePolicy::Memoized => {
                if let Some(cached) = self.cache.get() {
                    tracing::trace!(query = %self.query, "reusing cached view");
                    return Cow::Borrowed(cached);
                }
                Cow::Borrowed(self.cache.get_or_init(|| self.derive()))
            }
        }
    }

    fn derive(&self) -> Selection {
        filter::select(&self.data, &self.key, &self.query)
    }

    fn invalidate(&mut self, input: &'static str) {
        if self.cache.take().is_some() {
            tracing::trace!(input, "input changed, dropped cached view");
        }
    }
}

/// Builder for [`FilterState`].
#[derive(Debug)]
pub struct FilterStateBuilder<T, F = ()> {
    data: Vec<T>,
    key: FieldSelector<T>,
    fallback: F,
    query: String,
    policy: RecomputePolicy,
}

impl<T, F> FilterStateBuilder<T, F> {
    /// Sets the value surfaced when a query matches nothing.
    pub fn fallback<G>(self, fallback: G) -> FilterStateBuilder<T, G> {
        FilterStateBuilder {
            data: self.data,
            key: self.key,
            fallback,
            query: self.query,
            policy: self.policy,
        }
    }

    /// Sets the recompute policy.
    pub fn policy(mut self, policy: RecomputePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Starts with a non-empty query, e.g. restored from a previous session.
    pub fn query(mut self, raw: impl Into<String>) -> Self {
        self.query = raw.into();
        self
    }

    /// Builds the filter state.
    pub fn build(self) -> FilterState<T, F> {
        FilterState {
            data: self.data,
            key: self.key,
            fallback: self.fallback,
            query: self.query,
            policy: self.policy,
            cache: OnceCell::new(),
        }
    }
}

/// Everything a host renders, taken from one derivation.
#[derive(Debug)]
pub struct FilterSnapshot<'a, T, F> {
    /// Raw query text.
    pub query: &'a str,
    /// Filtered items.
    pub items: FilteredView<'a, T>,
    /// Fallback, when a non-empty query matched nothing.
    pub indicator: Option<&'a F>,
}

/// Borrowed, order-preserving view of the items that matched.
#[derive(Debug)]
pub struct FilteredView<'a, T> {
    data: &'a [T],
    selection: Cow<'a, Selection>,
}

impl<'a, T> FilteredView<'a, T> {
    /// Number of matching items.
    pub fn len(&self) -> usize {
        self.selection.len(self.data.len())
    }

    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `index`-th matching item.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        match self.selection.as_ref() {
            Selection::All => self.data.get(index),
            Selection::Indices(indices) => {
                let data = self.data;
                indices.get(index).map(|&i| &data[i])
            }
        }
    }

    /// Positions of the matching items within the full list.
    pub fn positions(&self) -> Vec<usize> {
        match self.selection.as_ref() {
            Selection::All => (0..self.data.len()).collect(),
            Selection::Indices(indices) => indices.clone(),
        }
    }

    /// Iterates over the matching items.
    pub fn iter(&self) -> Iter<'a, '_, T> {
        let cursor = match self.selection.as_ref() {
            Selection::All => Cursor::All(0..self.data.len()),
            Selection::Indices(indices) => Cursor::Indices(indices.iter()),
        };
        Iter {
            data: self.data,
            cursor,
        }
    }

    /// Collects the matching items.
    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'a, 'v, T> IntoIterator for &'v FilteredView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, 'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`FilteredView`].
#[derive(Debug)]
pub struct Iter<'a, 'v, T> {
    data: &'a [T],
    cursor: Cursor<'v>,
}

#[derive(Debug)]
enum Cursor<'v> {
    All(Range<usize>),
    Indices(slice::Iter<'v, usize>),
}

impl<'a, T> Iterator for Iter<'a, '_, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = match &mut self.cursor {
            Cursor::All(range) => range.next()?,
            Cursor::Indices(indices) => *indices.next()?,
        };
        self.data.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Cursor::All(range) => range.size_hint(),
            Cursor::Indices(indices) => indices.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, '_, T> {}

impl<T> FusedIterator for Iter<'_, '_, T> {}
