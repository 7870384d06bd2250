//! Proc macros for Sift.
//!
//! # Available Macros
//!
//! - [`Searchable`] - Generate field accessors that sift filters can match on
//!
//! The generated code refers to the `sift` crate by absolute path, so the
//! crate using the derive must depend on `sift` directly.

mod searchable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Searchable` trait for structs with named fields.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | Text field, anything implementing `AsRef<str>` (borrowed, no copy) |
/// | `Number` | Numeric field, any `Copy` primitive convertible into `sift::Number` |
/// | `Bool` | Boolean field |
/// | `Char` | Single character field |
/// | `Display` | Any `ToString` type, formatted on each read |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom field name |
/// | `ty = "..."` | Give the kind as a string, e.g. `ty = "bool"` |
///
/// Fields without a `#[search(...)]` attribute are not searchable.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Fruit::NAME`, `Fruit::STOCK`)
/// 2. Implementation of `Searchable::search_field_value()`
///
/// # Example
///
/// ```ignore
/// use sift::{FieldSelector, FilterState};
/// use sift_macros::Searchable;
///
/// #[derive(Searchable)]
/// struct Fruit {
///     #[search(String)]
///     name: String,
///
///     #[search(Number)]
///     stock: u32,
///
///     #[search(Display, rename = "origin")]
///     country: Country,
///
///     #[search(skip)]
///     internal_id: u64,
/// }
///
/// let mut state = FilterState::new(fruits, FieldSelector::field(Fruit::NAME), "No fruit");
/// state.on_query_change("app");
/// ```
#[proc_macro_derive(Searchable, attributes(search))]
pub fn searchable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    searchable::searchable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
