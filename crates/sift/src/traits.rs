//! Field access for searchable records.
//!
//! This module provides the [`Searchable`] trait, implemented by the
//! `#[derive(Searchable)]` macro or by hand, so a record can hand out any of
//! its fields by name.

use crate::value::Value;

/// Trait for records whose fields can be filtered by name.
///
/// This trait is typically derived using `#[derive(Searchable)]` from the
/// `sift-macros` crate (re-exported by `sift` with the `derive` feature), but
/// can also be implemented manually.
///
/// # Derive Usage
///
/// ```ignore
/// use sift::{FieldSelector, FilterState, Searchable};
///
/// #[derive(Searchable)]
/// struct Fruit {
///     #[search(String)]
///     name: String,
///     #[search(Number)]
///     stock: u32,
/// }
///
/// let state = FilterState::new(fruits, FieldSelector::field(Fruit::NAME), "No fruit");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use sift::{Searchable, Value, Number};
///
/// struct Fruit {
///     name: String,
///     stock: u32,
/// }
///
/// impl Searchable for Fruit {
///     fn search_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "stock" => Value::Number(Number::from(self.stock)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Searchable {
    /// Returns the value of a field for matching.
    ///
    /// Unknown or unsupported field names return [`Value::None`], which
    /// coerces to empty text.
    fn search_field_value(&self, field: &str) -> Value<'_>;

    /// Returns a static accessor function suitable for [`FieldSelector::new`].
    ///
    /// [`FieldSelector::new`]: crate::FieldSelector::new
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.search_field_value(field)
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_field_value(&self, field: &str) -> Value<'_> {
        (**self).search_field_value(field)
    }
}

impl<T: Searchable + ?Sized> Searchable for Box<T> {
    fn search_field_value(&self, field: &str) -> Value<'_> {
        (**self).search_field_value(field)
    }
}

/// A bare string is its own (only) field: every field name reads the string.
impl Searchable for String {
    fn search_field_value(&self, _field: &str) -> Value<'_> {
        Value::String(self)
    }
}

impl Searchable for str {
    fn search_field_value(&self, _field: &str) -> Value<'_> {
        Value::String(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    struct TestItem {
        name: String,
        count: i32,
    }

    impl Searchable for TestItem {
        fn search_field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::String(&self.name),
                "count" => Value::Number(Number::from(self.count)),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn searchable_manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
            count: 42,
        };

        assert_eq!(item.search_field_value("name"), Value::String("test"));
        assert_eq!(
            item.search_field_value("count"),
            Value::Number(Number::I64(42))
        );
        assert_eq!(item.search_field_value("unknown"), Value::None);
    }

    #[test]
    fn searchable_accessor() {
        let item = TestItem {
            name: "test".to_string(),
            count: 42,
        };

        assert_eq!(TestItem::accessor(&item, "name"), Value::String("test"));
    }

    #[test]
    fn references_and_boxes_delegate() {
        let item = TestItem {
            name: "boxed".to_string(),
            count: 1,
        };
        let boxed = Box::new(TestItem {
            name: "boxed".to_string(),
            count: 1,
        });

        assert_eq!((&item).search_field_value("name"), Value::String("boxed"));
        assert_eq!(boxed.search_field_value("count").to_text(), "1");
    }

    #[test]
    fn strings_ignore_field_name() {
        let s = String::from("plain");
        assert_eq!(s.search_field_value("anything"), Value::String("plain"));
        assert_eq!("slice".search_field_value(""), Value::String("slice"));
    }
}
