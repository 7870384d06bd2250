//! JSON records.
//!
//! With the `json` feature (on by default), [`serde_json::Value`] is
//! [`Searchable`]. The field name is a dotted path: object members by key,
//! array elements by decimal index.
//!
//! ```
//! use serde_json::json;
//! use sift::{FieldSelector, FilterState};
//!
//! let people = vec![
//!     json!({ "name": "Ana", "address": { "city": "São Paulo" } }),
//!     json!({ "name": "Ben", "address": { "city": "Berlin" } }),
//! ];
//!
//! let mut state = FilterState::new(people, FieldSelector::field("address.city"), "nobody");
//! state.on_query_change("sao");
//! assert_eq!(state.filtered_data().to_vec()[0]["name"], "Ana");
//! ```

use std::fmt;
use std::str::FromStr;

use serde_json::Value as Json;

use crate::error::{Result, SiftError};
use crate::traits::Searchable;
use crate::value::{Number, Value};

/// A validated dotted path into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses `a.b.0` style paths. Surrounding whitespace is ignored.
    pub fn parse(path: &str) -> Result<Self> {
        let raw = path.trim();
        if raw.is_empty() {
            return Err(SiftError::EmptyPath);
        }

        let mut segments = Vec::new();
        for (position, segment) in raw.split('.').enumerate() {
            if segment.is_empty() {
                return Err(SiftError::EmptySegment {
                    path: raw.to_string(),
                    position,
                });
            }
            segments.push(segment.to_string());
        }

        Ok(FieldPath {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The individual path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Follows the path into `root`.
    pub fn lookup<'v>(&self, root: &'v Json) -> Option<&'v Json> {
        walk(root, self.segments())
    }
}

impl FromStr for FieldPath {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        FieldPath::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn walk<'v, 's>(root: &'v Json, mut segments: impl Iterator<Item = &'s str>) -> Option<&'v Json> {
    segments.try_fold(root, |node, segment| step(node, segment))
}

fn step<'v>(node: &'v Json, segment: &str) -> Option<&'v Json> {
    match node {
        Json::Object(map) => map.get(segment),
        Json::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Resolves `field` against `root`: an exact member name wins, otherwise the
/// name is walked as a dotted path.
fn resolve<'v>(root: &'v Json, field: &str) -> Option<&'v Json> {
    if let Some(found) = root.as_object().and_then(|map| map.get(field)) {
        return Some(found);
    }
    walk(root, field.split('.'))
}

/// Maps a JSON node to the value used for matching.
///
/// Arrays and objects become their compact JSON text; `null` is a missing
/// value.
pub fn json_value(node: &Json) -> Value<'_> {
    match node {
        Json::String(s) => Value::String(s),
        Json::Number(n) => Value::Number(json_number(n)),
        Json::Bool(b) => Value::Bool(*b),
        Json::Null => Value::None,
        Json::Array(_) | Json::Object(_) => Value::Text(node.to_string()),
    }
}

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl Searchable for Json {
    fn search_field_value(&self, field: &str) -> Value<'_> {
        resolve(self, field).map_or(Value::None, json_value)
    }
}
