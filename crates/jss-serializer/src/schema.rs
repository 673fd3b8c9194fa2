//! Read-only view over a schema node.
//!
//! Schema nodes are plain `serde_json::Value`s. A node that is not a JSON
//! object behaves as an empty node, and `null` fields are treated as
//! absent.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// Path of the root schema node.
pub(crate) const ROOT_PATH: &str = "#";

/// Stand-in for a missing child schema: no type, so it coerces to null.
static EMPTY_SCHEMA: Value = Value::Null;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SchemaNode<'s> {
    raw: &'s Value,
}

impl<'s> SchemaNode<'s> {
    pub(crate) fn new(raw: &'s Value) -> Self {
        Self { raw }
    }

    /// Field lookup; `null` counts as absent.
    pub(crate) fn get(&self, key: &str) -> Option<&'s Value> {
        self.raw.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn declared_type(&self) -> Option<&'s Value> {
        self.get("type")
    }

    pub(crate) fn default_value(&self) -> Option<&'s Value> {
        self.get("default")
    }

    pub(crate) fn format(&self) -> Option<&'s str> {
        self.get("format").and_then(Value::as_str)
    }

    pub(crate) fn properties(&self) -> Option<&'s Map<String, Value>> {
        self.get("properties").and_then(Value::as_object)
    }

    /// Names listed in `required`. Anything but an array means none.
    pub(crate) fn required(&self) -> HashSet<&'s str> {
        self.get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub(crate) fn items(&self) -> &'s Value {
        self.get("items").unwrap_or(&EMPTY_SCHEMA)
    }

    /// Schema for keys not covered by `properties`.
    ///
    /// An object is used as is, `true` means an empty schema, and `false`
    /// or absence disables additional keys.
    pub(crate) fn additional_properties(&self) -> Option<&'s Value> {
        match self.get("additionalProperties")? {
            schema @ Value::Object(_) => Some(schema),
            Value::Bool(true) => Some(&EMPTY_SCHEMA),
            _ => None,
        }
    }
}
