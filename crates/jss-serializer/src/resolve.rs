//! # Type Resolution
//!
//! A schema may declare a single type or an ordered list of candidates
//! (`["string", "null"]`). For a list, the concrete type follows what the
//! input actually looks like: the input is classified into a [`ValueKind`],
//! each kind has a fixed preference order, and the first preferred type
//! present among the candidates wins. When none is present the first
//! declared candidate is used.
//!
//! | kind     | preference                               |
//! |----------|------------------------------------------|
//! | absent   | `null`                                   |
//! | temporal | `string`, `number`, `integer`            |
//! | string   | `string`                                 |
//! | integer  | `integer`, `number`, `string`, `boolean` |
//! | float    | `number`, `string`, `integer`, `boolean` |
//! | boolean  | `boolean`                                |
//! | sequence | `array`                                  |
//! | other    | `object`                                 |

use std::fmt;

use jss_core::Input;
use serde_json::Value;

/// Concrete output type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    /// Always the absent-marker.
    Null,
    /// String.
    String,
    /// Integer.
    Integer,
    /// Floating-point number.
    Number,
    /// Boolean.
    Boolean,
    /// Array of `items`.
    Array,
    /// Object of `properties`.
    Object,
}

impl SchemaType {
    /// All types, in declaration order.
    pub const ALL: [SchemaType; 7] = [
        SchemaType::Null,
        SchemaType::String,
        SchemaType::Integer,
        SchemaType::Number,
        SchemaType::Boolean,
        SchemaType::Array,
        SchemaType::Object,
    ];

    /// The JSON Schema name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Null => "null",
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
        }
    }

    /// Parse a JSON Schema type name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime category of an input, used to pick among candidate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Absent value.
    Absent,
    /// Date or instant.
    Temporal,
    /// String.
    String,
    /// Integer.
    Integer,
    /// Floating-point number.
    Float,
    /// Boolean.
    Boolean,
    /// Sequence.
    Sequence,
    /// Anything else; treated as object-like.
    Other,
}

impl ValueKind {
    /// Classify an input.
    pub fn of(value: &Input) -> Self {
        match value {
            v if v.is_absent() => ValueKind::Absent,
            Input::Temporal(_) => ValueKind::Temporal,
            Input::String(_) => ValueKind::String,
            Input::Integer(_) => ValueKind::Integer,
            Input::Float(_) => ValueKind::Float,
            Input::Bool(_) => ValueKind::Boolean,
            Input::Seq(_) => ValueKind::Sequence,
            Input::WithContext(carrier) => ValueKind::of(&carrier.data),
            _ => ValueKind::Other,
        }
    }

    /// Preferred candidate types for this kind, most preferred first.
    pub fn preferences(self) -> &'static [&'static str] {
        match self {
            ValueKind::Absent => &["null"],
            ValueKind::Temporal => &["string", "number", "integer"],
            ValueKind::String => &["string"],
            ValueKind::Integer => &["integer", "number", "string", "boolean"],
            ValueKind::Float => &["number", "string", "integer", "boolean"],
            ValueKind::Boolean => &["boolean"],
            ValueKind::Sequence => &["array"],
            ValueKind::Other => &["object"],
        }
    }
}

/// Pick the concrete type name for `value` under a declared `type`.
///
/// A single name is returned unchanged. A list is resolved through the
/// preference table above; non-string entries are ignored. Returns `None`
/// when nothing is declared (or the list is empty), which the coercer
/// maps to the absent-marker.
///
/// ```
/// use jss_serializer::{detect_type, Input};
/// use serde_json::json;
///
/// let declared = json!(["number", "integer"]);
/// assert_eq!(detect_type(Some(&declared), &Input::Integer(42)), Some("integer"));
///
/// let declared = json!(["string", "null"]);
/// assert_eq!(detect_type(Some(&declared), &Input::Null), Some("null"));
/// ```
pub fn detect_type<'s>(declared: Option<&'s Value>, value: &Input) -> Option<&'s str> {
    match declared? {
        Value::String(name) => Some(name.as_str()),
        Value::Array(candidates) => {
            let names: Vec<&'s str> = candidates.iter().filter_map(Value::as_str).collect();
            ValueKind::of(value)
                .preferences()
                .iter()
                .find_map(|preferred| names.iter().find(|name| *name == preferred).copied())
                .or_else(|| names.first().copied())
        }
        _ => None,
    }
}
