//! Attribute storage shared by all resources
//!
//! Resources have no fixed schema on the client side: each one is a JSON
//! object whose fields are read and written by (possibly dotted) key. The
//! attributes seen at construction time are kept so that local edits can be
//! diffed against them.

use crate::error::{Error, Result};
use crate::http::ApiResponse;
use crate::types::{json_kind, JsonObject, JsonValue};
use chrono::NaiveDateTime;

/// Date format used by the API for every timestamp attribute
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current and original attribute mapping of a resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    current: JsonObject,
    original: JsonObject,
}

impl Attributes {
    /// Create attributes; the given mapping is also the change-tracking baseline
    pub fn new(attributes: JsonObject) -> Self {
        Self {
            original: attributes.clone(),
            current: attributes,
        }
    }

    /// Create attributes from a JSON value, which must be an object
    pub fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(map) => Ok(Self::new(map)),
            other => Err(Error::decode(format!(
                "resource attributes must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Create attributes from a single-resource response body
    pub fn from_response(response: ApiResponse) -> Result<Self> {
        response.into_object().map(Self::new)
    }

    /// Read an attribute by key or dotted path (`subscription_term.length`)
    ///
    /// A literal key containing dots wins over path traversal.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        dot_get(&self.current, key)
    }

    /// Write an attribute by key or dotted path
    ///
    /// Missing or non-object intermediate segments are replaced by empty
    /// objects.
    pub fn set(&mut self, key: &str, value: impl Into<JsonValue>) {
        dot_set(&mut self.current, key, value.into());
    }

    /// Read a string attribute; null and non-strings give `None`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(JsonValue::as_str)
    }

    /// Read an integer attribute, accepting numeric strings
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            JsonValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            JsonValue::String(s) => s.trim().parse().ok(),
            JsonValue::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Read a flag attribute; `true`, `1` and `"1"` count as set
    pub fn get_bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(JsonValue::Bool(b)) => *b,
            Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(JsonValue::String(s)) => matches!(s.as_str(), "1" | "true"),
            _ => false,
        }
    }

    /// Read a timestamp attribute in the API's date format
    pub fn get_datetime(&self, key: &str) -> Option<NaiveDateTime> {
        self.get_str(key)
            .filter(|s| !s.is_empty())
            .and_then(|s| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok())
    }

    /// Write a timestamp attribute, or null when `None`
    pub fn set_datetime(&mut self, key: &str, value: Option<NaiveDateTime>) {
        let value = value.map_or(JsonValue::Null, |dt| {
            JsonValue::String(dt.format(DATETIME_FORMAT).to_string())
        });
        self.set(key, value);
    }

    /// Read an array attribute; anything else gives `None`
    pub fn get_array(&self, key: &str) -> Option<&Vec<JsonValue>> {
        self.get(key).and_then(JsonValue::as_array)
    }

    /// The resource identifier
    pub fn id(&self) -> Option<i64> {
        self.get_i64("id")
    }

    /// Hypermedia link by relation name, from the `_links` attribute
    pub fn link(&self, name: &str) -> Option<&str> {
        self.current
            .get("_links")
            .and_then(|links| links.get(name))
            .and_then(JsonValue::as_str)
    }

    /// Merge top-level attributes into the current mapping
    pub fn fill(&mut self, attributes: JsonObject) -> &mut Self {
        self.current.extend(attributes);
        self
    }

    /// Top-level attributes that differ from the original mapping
    ///
    /// Keys absent from the original mapping count as changed.
    pub fn changes(&self) -> JsonObject {
        self.current
            .iter()
            .filter(|(key, value)| self.original.get(*key) != Some(*value))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Whether any attribute changed since construction
    pub fn has_changes(&self) -> bool {
        !self.changes().is_empty()
    }

    /// The current attribute mapping
    pub fn as_map(&self) -> &JsonObject {
        &self.current
    }

    /// Consume into the current attribute mapping
    pub fn into_map(self) -> JsonObject {
        self.current
    }

    /// The current attributes as a JSON value
    pub fn to_value(&self) -> JsonValue {
        JsonValue::Object(self.current.clone())
    }
}

impl From<JsonObject> for Attributes {
    fn from(map: JsonObject) -> Self {
        Self::new(map)
    }
}

/// Resolve `key` in `map`, first literally, then as a dotted path
pub fn dot_get<'a>(map: &'a JsonObject, key: &str) -> Option<&'a JsonValue> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }
    if !key.contains('.') {
        return None;
    }

    let mut segments = key.split('.');
    let first = segments.next()?;
    let mut current = map.get(first)?;
    for segment in segments {
        match current {
            JsonValue::Object(inner) => current = inner.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Assign `value` at the dotted path `key`, creating objects along the way
pub fn dot_set(map: &mut JsonObject, key: &str, value: JsonValue) {
    let segments: Vec<&str> = key.split('.').collect();
    set_segments(map, &segments, value);
}

fn set_segments(map: &mut JsonObject, segments: &[&str], value: JsonValue) {
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let slot = map.entry((*head).to_string()).or_insert(JsonValue::Null);
            if let JsonValue::Object(inner) = slot {
                set_segments(inner, rest, value);
            } else {
                let mut inner = JsonObject::new();
                set_segments(&mut inner, rest, value);
                *slot = JsonValue::Object(inner);
            }
        }
    }
}
