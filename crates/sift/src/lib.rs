//! Sift - live, accent-insensitive filtering for in-memory record lists.
//!
//! Sift binds a search field to a list of records. As the user types, it
//! derives the matching records and, when nothing matches, hands back a
//! host-supplied fallback such as a "No results" message.
//!
//! - Matching is substring containment on normalized text: case, Latin
//!   diacritics and a fixed set of punctuation are ignored.
//! - Records expose fields by name through [`Searchable`] (derivable with the
//!   `derive` feature) or through a plain accessor function.
//! - Numbers, booleans and other field values are coerced to text before
//!   matching, so every field type is searchable.
//! - The filtered view is derived from `(data, key, query)` and cached until
//!   one of them changes by value.
//!
//! # Quick Start
//!
//! ```rust
//! use sift::{FieldSelector, FilterState, Searchable, Value};
//!
//! struct Fruit {
//!     name: String,
//! }
//!
//! impl Searchable for Fruit {
//!     fn search_field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::String(&self.name),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let fruits: Vec<Fruit> = ["Apple", "Banana", "Orange", "Pineapple", "Café", "Niño"]
//!     .into_iter()
//!     .map(|name| Fruit { name: name.to_string() })
//!     .collect();
//!
//! let mut state = FilterState::new(fruits, FieldSelector::field("name"), "No results");
//!
//! state.on_query_change("app");
//! let names: Vec<&str> = state.filtered_data().iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["Apple", "Pineapple"]);
//!
//! state.on_query_change("nino");
//! assert_eq!(state.filtered_data().get(0).map(|f| f.name.as_str()), Some("Niño"));
//!
//! state.on_query_change("xyz");
//! assert_eq!(state.indicator(), Some(&"No results"));
//! ```
//!
//! # Matching Semantics
//!
//! ```text
//! empty query       → every item, no indicator
//! otherwise         → items where normalize(field) contains normalize(query)
//! nothing matched   → indicator = fallback
//! ```
//!
//! See [`normalize()`] for the exact normalization steps.
//!
//! # Features
//!
//! - **`json`** (default) - [`serde_json::Value`] records with dotted field paths
//! - **`derive`** - re-exports `#[derive(Searchable)]` from `sift-macros`

mod error;
pub mod filter;
#[cfg(feature = "json")]
mod json;
mod normalize;
mod selector;
mod state;
mod traits;
mod value;

// Re-export public API
pub use error::{Result, SiftError};
pub use filter::{filter, Selection};
#[cfg(feature = "json")]
pub use json::{json_value, FieldPath};
pub use normalize::{
    is_combining_diacritic, is_stripped_punctuation, matches, normalize, NormalizedKey,
    STRIPPED_PUNCTUATION,
};
pub use selector::{Accessor, FieldSelector};
pub use state::{FilterSnapshot, FilterState, FilterStateBuilder, FilteredView, Iter, RecomputePolicy};
pub use traits::Searchable;
pub use value::{Number, Value};

#[cfg(feature = "derive")]
pub use sift_macros::Searchable;
