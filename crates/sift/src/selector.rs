//! Field selectors: which field of a record participates in matching.

use std::borrow::Cow;
use std::fmt;

use crate::normalize::NormalizedKey;
use crate::traits::Searchable;
use crate::value::Value;

/// Accessor function reading a named field from a record.
pub type Accessor<T> = for<'a> fn(&'a T, &str) -> Value<'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// `T::accessor` from the [`Searchable`] impl.
    Trait,
    /// Host-supplied function.
    Custom,
}

/// Names one field of `T` and knows how to read it.
///
/// Two selectors are equal when they name the same field and read it the same
/// way. [`FilterState`](crate::FilterState) compares selectors to decide
/// whether a key change needs a rescan.
///
/// # Example
///
/// ```
/// use sift::{FieldSelector, Value};
///
/// struct City {
///     name: String,
///     population: u64,
/// }
///
/// let by_name = FieldSelector::<City>::new("name", |city, _field| Value::String(&city.name));
///
/// let city = City { name: "Zürich".into(), population: 421_878 };
/// assert_eq!(by_name.text(&city), "Zürich");
/// assert_eq!(by_name.key(&city).as_str(), "zurich");
/// ```
pub struct FieldSelector<T> {
    name: Cow<'static, str>,
    accessor: Accessor<T>,
    source: Source,
}

impl<T> FieldSelector<T> {
    /// Creates a selector from a field name and an accessor function.
    ///
    /// The accessor receives the field name on every call, so a single
    /// function can serve every field of a record type.
    pub fn new(name: impl Into<Cow<'static, str>>, accessor: Accessor<T>) -> Self {
        FieldSelector {
            name: name.into(),
            accessor,
            source: Source::Custom,
        }
    }

    /// Creates a selector that reads `name` through the record's [`Searchable`] impl.
    pub fn field(name: impl Into<Cow<'static, str>>) -> Self
    where
        T: Searchable,
    {
        FieldSelector {
            name: name.into(),
            accessor: T::accessor,
            source: Source::Trait,
        }
    }

    /// The selected field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the selected field from `item`.
    pub fn select<'a>(&self, item: &'a T) -> Value<'a> {
        (self.accessor)(item, &self.name)
    }

    /// Reads the selected field and coerces it to text.
    pub fn text<'a>(&self, item: &'a T) -> Cow<'a, str> {
        self.select(item).into_text()
    }

    /// Reads the selected field and normalizes it for comparison.
    pub fn key(&self, item: &T) -> NormalizedKey {
        NormalizedKey::new(&self.text(item))
    }
}

impl<T> Clone for FieldSelector<T> {
    fn clone(&self) -> Self {
        FieldSelector {
            name: self.name.clone(),
            accessor: self.accessor,
            source: self.source,
        }
    }
}

impl<T> PartialEq for FieldSelector<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name {
            return false;
        }
        match (self.source, other.source) {
            // Same record type, same trait impl.
            (Source::Trait, Source::Trait) => true,
            _ => self.accessor as usize == other.accessor as usize,
        }
    }
}

impl<T> Eq for FieldSelector<T> {}

impl<T> fmt::Debug for FieldSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSelector")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
