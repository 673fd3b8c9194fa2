//! # Input Values
//!
//! [`Input`] is the loosely-typed value the serializer coerces. Containers
//! are reference counted, so handing a child value to a recursive call is a
//! pointer copy rather than a deep clone.
//!
//! ## Conversions
//!
//! - `serde_json::Value` converts structurally (`From<Value>`).
//! - Any `Serialize` domain object converts through
//!   [`Input::from_serialize`].
//! - Scalars, strings, `chrono` dates and instants, `regex::Regex`,
//!   vectors, and options convert with `From`.
//! - Custom models implement [`Record`] and enter through
//!   [`Input::record`].

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::context::DataWithContext;
use crate::convert::{format_float, parse_leading_float, parse_leading_int, truncate_float};
use crate::error::InputError;
use crate::record::Record;
use crate::temporal::Temporal;

/// A loosely-typed input value.
#[derive(Debug, Clone, Default)]
pub enum Input {
    /// Absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// String.
    String(String),
    /// Date or instant.
    Temporal(Temporal),
    /// Regular expression; renders as its pattern text.
    Pattern(Regex),
    /// Ordered sequence.
    Seq(Arc<Vec<Input>>),
    /// Insertion-ordered mapping with string keys.
    Map(Arc<InputMap>),
    /// Object-like value exposing the [`Record`] capability.
    Record(Arc<dyn Record>),
    /// Value paired with an injector context.
    WithContext(Arc<DataWithContext>),
}

impl Input {
    /// Wrap a [`Record`] implementation.
    pub fn record(record: impl Record + 'static) -> Self {
        Input::Record(Arc::new(record))
    }

    /// Convert any serializable value through an intermediate JSON tree.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Serialization` when the value's `Serialize`
    /// implementation fails (e.g. a map with non-string keys).
    pub fn from_serialize(value: &impl Serialize) -> Result<Self, InputError> {
        Ok(Input::from(serde_json::to_value(value)?))
    }

    /// Whether the value is absent: `Null`, or a record reporting null.
    pub fn is_absent(&self) -> bool {
        match self {
            Input::Null => true,
            Input::Record(record) => record.is_null(),
            _ => false,
        }
    }

    /// Whether the value is a scalar, as opposed to absent or a container.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Input::Bool(_)
                | Input::Integer(_)
                | Input::Float(_)
                | Input::String(_)
                | Input::Temporal(_)
                | Input::Pattern(_)
        )
    }

    /// Whether the value is the empty string.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Input::String(s) if s.is_empty())
    }

    /// Truthiness: only absent and `false` are falsy. `0` and `""` are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Input::Null | Input::Bool(false))
    }

    /// Look up `key`: bracket access first, then named accessor.
    ///
    /// Only mappings and records have keys; every other input yields `None`.
    pub fn lookup(&self, key: &str) -> Option<Input> {
        match self {
            Input::Map(map) => map.get(key).cloned(),
            Input::Record(record) => record.index(key).or_else(|| record.field(key)),
            Input::WithContext(carrier) => carrier.data.lookup(key),
            _ => None,
        }
    }

    /// Keys in encounter order. Empty for non-object inputs.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Input::Map(map) => map.keys().map(str::to_string).collect(),
            Input::Record(record) => record.keys(),
            Input::WithContext(carrier) => carrier.data.keys(),
            _ => Vec::new(),
        }
    }

    /// Elements when the value is iterable as a sequence.
    pub fn elements(&self) -> Option<Vec<Input>> {
        match self {
            Input::Seq(items) => Some(items.as_ref().clone()),
            Input::Record(record) => record.elements(),
            Input::WithContext(carrier) => carrier.data.elements(),
            _ => None,
        }
    }

    /// Integer conversion that never fails.
    ///
    /// Booleans are 1/0, floats truncate, strings parse their leading
    /// integer, temporals yield epoch seconds, anything else is 0.
    pub fn to_i64_lossy(&self) -> i64 {
        match self {
            Input::Bool(b) => i64::from(*b),
            Input::Integer(i) => *i,
            Input::Float(f) => truncate_float(*f),
            Input::String(s) => parse_leading_int(s),
            Input::Temporal(t) => t.epoch_secs(),
            Input::WithContext(carrier) => carrier.data.to_i64_lossy(),
            _ => 0,
        }
    }

    /// Float conversion that never fails and never yields NaN or infinity.
    pub fn to_f64_lossy(&self) -> f64 {
        let value = match self {
            Input::Bool(b) => f64::from(u8::from(*b)),
            Input::Integer(i) => *i as f64,
            Input::Float(f) => *f,
            Input::String(s) => parse_leading_float(s),
            Input::Temporal(t) => t.epoch_f64(),
            Input::WithContext(carrier) => carrier.data.to_f64_lossy(),
            _ => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Best-effort JSON rendering, used for the string form of containers.
    pub fn to_json_lossy(&self) -> Value {
        match self {
            Input::Null => Value::Null,
            Input::Bool(b) => Value::Bool(*b),
            Input::Integer(i) => Value::from(*i),
            Input::Float(f) => serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Input::String(s) => Value::String(s.clone()),
            Input::Temporal(t) => Value::String(t.to_string()),
            Input::Pattern(p) => Value::String(p.as_str().to_string()),
            Input::Seq(items) => Value::Array(items.iter().map(Input::to_json_lossy).collect()),
            Input::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json_lossy()))
                    .collect(),
            ),
            Input::Record(record) => Value::String(record.to_display_string()),
            Input::WithContext(carrier) => carrier.data.to_json_lossy(),
        }
    }
}

/// Natural string form: `""` for absent, decimal numbers, RFC 3339
/// instants, pattern source, compact JSON for containers.
impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Null => Ok(()),
            Input::Bool(b) => write!(f, "{b}"),
            Input::Integer(i) => write!(f, "{i}"),
            Input::Float(v) => f.write_str(&format_float(*v)),
            Input::String(s) => f.write_str(s),
            Input::Temporal(t) => write!(f, "{t}"),
            Input::Pattern(p) => f.write_str(p.as_str()),
            Input::Seq(_) | Input::Map(_) => write!(f, "{}", self.to_json_lossy()),
            Input::Record(record) => f.write_str(&record.to_display_string()),
            Input::WithContext(carrier) => write!(f, "{}", carrier.data),
        }
    }
}

/// Loose equality: integers equal floats of the same value, records are
/// equal only to themselves, mappings ignore key order.
impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Input::Null, Input::Null) => true,
            (Input::Bool(a), Input::Bool(b)) => a == b,
            (Input::Integer(a), Input::Integer(b)) => a == b,
            (Input::Float(a), Input::Float(b)) => a == b,
            (Input::Integer(i), Input::Float(f)) | (Input::Float(f), Input::Integer(i)) => {
                *i as f64 == *f
            }
            (Input::String(a), Input::String(b)) => a == b,
            (Input::Temporal(a), Input::Temporal(b)) => a == b,
            (Input::Pattern(a), Input::Pattern(b)) => a.as_str() == b.as_str(),
            (Input::Seq(a), Input::Seq(b)) => a == b,
            (Input::Map(a), Input::Map(b)) => a == b,
            (Input::Record(a), Input::Record(b)) => Arc::ptr_eq(a, b),
            (Input::WithContext(a), Input::WithContext(b)) => a == b,
            _ => false,
        }
    }
}

/// Insertion-ordered mapping from string keys to inputs.
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    entries: Vec<(String, Input)>,
}

impl InputMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and the previous
    /// value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Input>) -> Option<Input> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Input> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Input)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for InputMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Into<String>, V: Into<Input>> FromIterator<(K, V)> for InputMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = InputMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// ─── Conversions ─────────────────────────────────────────────────────

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Input::Null,
            Value::Bool(b) => Input::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Input::Integer(i),
                None => Input::Float(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => Input::String(s),
            Value::Array(items) => Input::Seq(Arc::new(items.into_iter().map(Input::from).collect())),
            Value::Object(map) => Input::Map(Arc::new(map.into_iter().collect())),
        }
    }
}

impl From<&Value> for Input {
    fn from(value: &Value) -> Self {
        Input::from(value.clone())
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Input {
            fn from(n: $t) -> Self {
                Input::Integer(i64::from(n))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Input {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Input::Float(n as f64), Input::Integer)
    }
}

impl From<f32> for Input {
    fn from(f: f32) -> Self {
        Input::Float(f64::from(f))
    }
}

impl From<f64> for Input {
    fn from(f: f64) -> Self {
        Input::Float(f)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::String(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::String(s)
    }
}

impl From<Temporal> for Input {
    fn from(t: Temporal) -> Self {
        Input::Temporal(t)
    }
}

impl From<NaiveDate> for Input {
    fn from(date: NaiveDate) -> Self {
        Input::Temporal(date.into())
    }
}

impl From<NaiveDateTime> for Input {
    fn from(dt: NaiveDateTime) -> Self {
        Input::Temporal(dt.into())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Input {
    fn from(dt: DateTime<Tz>) -> Self {
        Input::Temporal(dt.into())
    }
}

impl From<Regex> for Input {
    fn from(pattern: Regex) -> Self {
        Input::Pattern(pattern)
    }
}

impl From<InputMap> for Input {
    fn from(map: InputMap) -> Self {
        Input::Map(Arc::new(map))
    }
}

impl From<DataWithContext> for Input {
    fn from(carrier: DataWithContext) -> Self {
        Input::WithContext(Arc::new(carrier))
    }
}

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Input::Seq(Arc::new(items.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Model {
        name: String,
    }

    impl Record for Model {
        fn index(&self, key: &str) -> Option<Input> {
            (key == "id").then(|| Input::Integer(1))
        }

        fn field(&self, name: &str) -> Option<Input> {
            match name {
                "name" => Some(self.name.clone().into()),
                "id" => Some(Input::Integer(99)),
                _ => None,
            }
        }

        fn keys(&self) -> Vec<String> {
            vec!["id".into(), "name".into()]
        }
    }

    #[test]
    fn test_from_json_structure() {
        let input = Input::from(json!({"a": [1, 2.5, "x", null, true]}));
        let list = input.lookup("a").and_then(|a| a.elements()).unwrap();
        assert_eq!(
            list,
            vec![
                Input::Integer(1),
                Input::Float(2.5),
                Input::from("x"),
                Input::Null,
                Input::Bool(true),
            ]
        );
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let input = Input::from(json!({"z": 1, "a": 2, "m": 3}));
        assert_eq!(input.keys(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_map_insert_keeps_position() {
        let mut map: InputMap = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.insert("a", 3), Some(Input::Integer(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Input::Integer(3)));
    }

    #[test]
    fn test_record_lookup_prefers_index() {
        let model = Input::record(Model { name: "foo".into() });
        assert_eq!(model.lookup("id"), Some(Input::Integer(1)));
        assert_eq!(model.lookup("name"), Some(Input::from("foo")));
        assert_eq!(model.lookup("missing"), None);
        assert_eq!(model.keys(), vec!["id", "name"]);
    }

    #[test]
    fn test_primitives_have_no_keys() {
        assert_eq!(Input::from("string").lookup("len"), None);
        assert!(Input::Integer(5).keys().is_empty());
        assert!(Input::from("abc").elements().is_none());
    }

    #[test]
    fn test_natural_string() {
        assert_eq!(Input::Null.to_string(), "");
        assert_eq!(Input::Bool(false).to_string(), "false");
        assert_eq!(Input::Integer(42).to_string(), "42");
        assert_eq!(Input::Float(42.195).to_string(), "42.195");
        assert_eq!(Input::Float(42.0).to_string(), "42.0");
        assert_eq!(Input::from(json!([])).to_string(), "[]");
        assert_eq!(Input::from(json!({})).to_string(), "{}");
        assert_eq!(Input::from(json!({"a": [1]})).to_string(), r#"{"a":[1]}"#);
        assert_eq!(Input::from(Regex::new("^a+$").unwrap()).to_string(), "^a+$");
    }

    #[test]
    fn test_record_display_defaults_to_debug() {
        let model = Input::record(Model { name: "foo".into() });
        assert!(model.to_string().starts_with("Model"));
    }

    #[test]
    fn test_lossy_integers() {
        assert_eq!(Input::from("42").to_i64_lossy(), 42);
        assert_eq!(Input::from("foobar").to_i64_lossy(), 0);
        assert_eq!(Input::Float(42.195).to_i64_lossy(), 42);
        assert_eq!(Input::Bool(true).to_i64_lossy(), 1);
        assert_eq!(Input::from(json!({})).to_i64_lossy(), 0);
    }

    #[test]
    fn test_lossy_floats() {
        assert_eq!(Input::from("42").to_f64_lossy(), 42.0);
        assert_eq!(Input::Integer(42).to_f64_lossy(), 42.0);
        assert_eq!(Input::Float(f64::NAN).to_f64_lossy(), 0.0);
        assert_eq!(Input::Bool(false).to_f64_lossy(), 0.0);
    }

    #[test]
    fn test_truthiness() {
        assert!(!Input::Null.is_truthy());
        assert!(!Input::Bool(false).is_truthy());
        assert!(Input::Integer(0).is_truthy());
        assert!(Input::from("").is_truthy());
    }

    #[test]
    fn test_loose_equality() {
        assert_eq!(Input::Integer(1), Input::Float(1.0));
        assert_ne!(Input::Integer(1), Input::from("1"));
        assert_ne!(Input::Bool(false), Input::Integer(0));
        assert_eq!(
            Input::from(json!({"a": 1, "b": 2})),
            Input::from(json!({"b": 2, "a": 1}))
        );
        let model = Input::record(Model { name: "x".into() });
        assert_eq!(model, model.clone());
        assert_ne!(model, Input::record(Model { name: "x".into() }));
    }

    #[test]
    fn test_primitive_classification() {
        assert!(Input::from("s").is_primitive());
        assert!(Input::Float(1.0).is_primitive());
        assert!(!Input::Null.is_primitive());
        assert!(!Input::from(json!([])).is_primitive());
        assert!(!Input::from(json!({})).is_primitive());
    }

    #[test]
    fn test_from_serialize() {
        #[derive(Serialize)]
        struct User {
            name: &'static str,
            age: u32,
        }
        let input = Input::from_serialize(&User { name: "ann", age: 30 }).unwrap();
        assert_eq!(input.lookup("age"), Some(Input::Integer(30)));
        assert_eq!(input.keys(), vec!["name", "age"]);
    }

    #[test]
    fn test_u64_overflow_becomes_float() {
        assert_eq!(Input::from(u64::MAX), Input::Float(u64::MAX as f64));
    }

    #[test]
    fn test_carrier_exposes_inner_elements() {
        let carrier = Input::from(DataWithContext::new(vec![1, 2], json!({"k": 1})));
        assert_eq!(carrier.elements(), Some(vec![Input::Integer(1), Input::Integer(2)]));
        let scalar = Input::from(DataWithContext::new("x", json!(null)));
        assert_eq!(scalar.elements(), None);
    }
}
