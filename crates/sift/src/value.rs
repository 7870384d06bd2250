//! Runtime field values and their textual coercion.
//!
//! The [`Value`] enum is what a field accessor hands back for one field of one
//! record. Before matching, every value is coerced to text with
//! [`Value::to_text`], so numbers and booleans are searchable the same way as
//! strings.

use std::borrow::Cow;
use std::fmt;

/// Runtime value of a record field, usually borrowed from the record.
///
/// # Example
///
/// ```
/// use sift::{Value, Number};
///
/// struct Fruit {
///     name: String,
///     stock: u32,
/// }
///
/// fn accessor<'a>(fruit: &'a Fruit, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&fruit.name),
///         "stock" => Value::Number(Number::from(fruit.stock)),
///         _ => Value::None,
///     }
/// }
///
/// let apple = Fruit { name: "Apple".into(), stock: 12 };
/// assert_eq!(accessor(&apple, "stock").to_text(), "12");
/// assert_eq!(accessor(&apple, "colour").to_text(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Text produced on demand, such as `Display` output.
    Text(String),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Single character.
    Char(char),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` for the two textual variants.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::String(_) | Value::Text(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Extracts the text, if this is a textual variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Coerces the value to the text that participates in matching.
    ///
    /// Borrowed strings are returned without copying. A missing field
    /// ([`Value::None`]) becomes the empty string, so it only matches an
    /// empty query.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Value::String(s) => Cow::Borrowed(*s),
            Value::Text(s) => Cow::Owned(s.clone()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Char(c) => Cow::Owned(c.to_string()),
            Value::None => Cow::Borrowed(""),
        }
    }

    /// Like [`Value::to_text`], but moves owned text out instead of cloning it.
    pub fn into_text(self) -> Cow<'a, str> {
        match self {
            Value::Text(s) => Cow::Owned(s),
            other => other.to_text(),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }
}

/// Integers print in plain decimal. Floats use the shortest representation
/// that round-trips, with integral values printed without a fraction
/// (`3.0` prints as `3`), and non-finite values as `NaN`, `Infinity` and
/// `-Infinity`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) if n.is_nan() => f.write_str("NaN"),
            Number::F64(n) if n == f64::INFINITY => f.write_str("Infinity"),
            Number::F64(n) if n == f64::NEG_INFINITY => f.write_str("-Infinity"),
            // -0.0 prints as "0"
            Number::F64(n) if n == 0.0 => f.write_str("0"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

impl From<Number> for Value<'_> {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

macro_rules! number_from {
    ($variant:ident, $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $wide)
                }
            }

            impl From<$t> for Value<'_> {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(I64, i64: i8, i16, i32, i64, isize);
number_from!(U64, u64: u8, u16, u32, u64, usize);
number_from!(F64, f64: f32, f64);
