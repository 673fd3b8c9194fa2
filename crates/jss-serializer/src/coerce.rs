//! # Coercion
//!
//! Per-type conversion of a value once its concrete type is known. Every
//! branch is total: wrong-typed, malformed, or missing values map to the
//! type's zero value (or `null` under the matching option). The only
//! failures are schemas the walker cannot interpret.
//!
//! | type      | absent               | notes                                        |
//! |-----------|----------------------|----------------------------------------------|
//! | `null`    | `null`               | always `null`                                |
//! | `string`  | `""`                 | temporals honor `format`                     |
//! | `integer` | `0`                  | `""` may become `null`; floats truncate      |
//! | `number`  | `0.0`                | `""` may become `null`                       |
//! | `boolean` | `false`              | `false_values` or strict mode                |
//! | `array`   | `[]`                 | non-sequences are treated as absent          |
//! | `object`  | properties of `null` | `additionalProperties` adds extra keys       |
//!
//! With `null_through` every "absent" column becomes `null`. For `object`
//! that check comes first, so no property is walked for an absent value.

use std::collections::HashSet;

use jss_core::Input;
use serde_json::{Map, Value};

use crate::error::SerializeError;
use crate::options::Options;
use crate::resolve::SchemaType;
use crate::schema::{SchemaNode, ROOT_PATH};
use crate::walker::Walker;

impl Walker<'_> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn coerce(
        &self,
        node: SchemaNode<'_>,
        resolved: Option<&str>,
        format: Option<&str>,
        value: Input,
        required: bool,
        context: Option<&Value>,
        path: &str,
    ) -> Result<Value, SerializeError> {
        if !required && value.is_absent() {
            return Ok(Value::Null);
        }
        let Some(type_name) = resolved else {
            return Ok(Value::Null);
        };
        let schema_type = SchemaType::parse(type_name).ok_or_else(|| SerializeError::UnknownType {
            path: path.to_string(),
            type_name: type_name.to_string(),
        })?;

        let coerced = match schema_type {
            SchemaType::Null => Value::Null,
            SchemaType::String => self.coerce_string(&value, format),
            SchemaType::Integer => self.coerce_integer(&value),
            SchemaType::Number => self.coerce_number(&value),
            SchemaType::Boolean => self.coerce_boolean(&value),
            SchemaType::Array => self.coerce_array(node, &value, context, path)?,
            SchemaType::Object => self.coerce_object(node, &value, context, path)?,
        };
        Ok(coerced)
    }

    /// Zero value of a type, or `null` under `null_through`.
    fn absent_or(&self, zero: Value) -> Value {
        if self.options.null_through {
            Value::Null
        } else {
            zero
        }
    }

    fn coerce_string(&self, value: &Input, format: Option<&str>) -> Value {
        match value {
            v if v.is_absent() => self.absent_or(Value::String(String::new())),
            Input::Temporal(t) => Value::String(t.format(format)),
            other => Value::String(other.to_string()),
        }
    }

    fn coerce_integer(&self, value: &Input) -> Value {
        match value {
            Input::Bool(b) => Value::from(i64::from(*b)),
            v if v.is_absent() => self.absent_or(Value::from(0)),
            v if v.is_empty_string() && self.options.empty_string_number_coerce_null => Value::Null,
            other => Value::from(other.to_i64_lossy()),
        }
    }

    fn coerce_number(&self, value: &Input) -> Value {
        match value {
            Input::Bool(b) => Value::from(if *b { 1.0 } else { 0.0 }),
            v if v.is_absent() => self.absent_or(Value::from(0.0)),
            v if v.is_empty_string() && self.options.empty_string_number_coerce_null => Value::Null,
            other => Value::from(other.to_f64_lossy()),
        }
    }

    fn coerce_boolean(&self, value: &Input) -> Value {
        let options = self.options;
        if options.null_through && value.is_absent() {
            return Value::Null;
        }
        if options.empty_string_boolean_coerce_null && value.is_empty_string() {
            return Value::Null;
        }
        let truth = if let Some(false_values) = &options.false_values {
            !false_values.contains(value)
        } else if options.no_boolean_coerce {
            matches!(value, Input::Bool(true))
        } else {
            value.is_truthy()
        };
        Value::Bool(truth)
    }

    fn coerce_array(
        &self,
        node: SchemaNode<'_>,
        value: &Input,
        context: Option<&Value>,
        path: &str,
    ) -> Result<Value, SerializeError> {
        if value.is_absent() || (self.options.guard_primitive_in_structure && value.is_primitive()) {
            return Ok(self.absent_or(Value::Array(Vec::new())));
        }
        let Some(elements) = value.elements() else {
            return Ok(self.absent_or(Value::Array(Vec::new())));
        };

        let items = node.items();
        let items_path = format!("{path}/items");
        elements
            .into_iter()
            .map(|element| self.walk(items, element, true, context, &items_path))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn coerce_object(
        &self,
        node: SchemaNode<'_>,
        value: &Input,
        context: Option<&Value>,
        path: &str,
    ) -> Result<Value, SerializeError> {
        let options = self.options;
        if value.is_absent() && options.null_through {
            return Ok(Value::Null);
        }
        if options.guard_primitive_in_structure && value.is_primitive() {
            return Ok(self.absent_or(Value::Object(Map::new())));
        }
        let properties = node.properties().ok_or_else(|| SerializeError::MissingProperties {
            path: path.to_string(),
        })?;
        let required = node.required();

        let mut output = Map::new();
        let mut declared_keys = HashSet::with_capacity(properties.len());
        for (name, property_schema) in properties {
            let input_key = options.input_key(name);
            let child = value.lookup(&input_key).unwrap_or_default();
            let child_path = format!("{path}/properties/{name}");
            let coerced = self.walk(
                property_schema,
                child,
                required.contains(name.as_str()),
                context,
                &child_path,
            )?;
            output.insert(options.output_key(name), coerced);
            declared_keys.insert(input_key);
        }

        if let Some(additional_schema) = node.additional_properties() {
            let additional_path = format!("{path}/additionalProperties");
            for key in value.keys() {
                if declared_keys.contains(&key) {
                    continue;
                }
                let child = value.lookup(&key).unwrap_or_default();
                let coerced = self.walk(additional_schema, child, false, context, &additional_path)?;
                output.insert(options.output_key(&key), coerced);
            }
        }

        Ok(Value::Object(output))
    }
}

/// Coerce `value` into an already-resolved type.
///
/// This is a single coercion step as the walker performs it after default
/// substitution, injection, and type resolution; child nodes are walked in
/// full. `resolved` is usually the result of [`detect_type`](crate::detect_type).
/// `None` yields `null`. The context in effect is `options.inject_context`.
///
/// # Errors
///
/// `UnknownType` when `resolved` is not a known type name, `MissingProperties`
/// when an `object` node has no `properties`, and `Injection` when an
/// injector below this node fails.
///
/// ```
/// use jss_serializer::{type_coerce, Options};
/// use serde_json::json;
///
/// let schema = json!({"type": "integer"});
/// let out = type_coerce(&schema, Some("integer"), None, "42", true, &Options::default()).unwrap();
/// assert_eq!(out, json!(42));
/// ```
pub fn type_coerce(
    schema: &Value,
    resolved: Option<&str>,
    format: Option<&str>,
    value: impl Into<Input>,
    required: bool,
    options: &Options,
) -> Result<Value, SerializeError> {
    Walker::new(options).coerce(
        SchemaNode::new(schema),
        resolved,
        format,
        value.into(),
        required,
        options.root_context(),
        ROOT_PATH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use regex::Regex;
    use serde_json::json;

    fn coerce(type_name: &str, value: impl Into<Input>, options: &Options) -> Value {
        let schema = json!({"type": type_name});
        type_coerce(&schema, Some(type_name), None, value, true, options).unwrap()
    }

    #[test]
    fn test_optional_absent_short_circuits() {
        let schema = json!({"type": "string"});
        let out = type_coerce(&schema, Some("string"), None, Input::Null, false, &Options::default());
        assert_eq!(out.unwrap(), Value::Null);
    }

    #[test]
    fn test_missing_type_is_null() {
        let out = type_coerce(&json!({}), None, None, "text", true, &Options::default());
        assert_eq!(out.unwrap(), Value::Null);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let err = type_coerce(&json!({}), Some("strnig"), None, "x", true, &Options::default()).unwrap_err();
        assert!(matches!(
            err,
            SerializeError::UnknownType { ref path, ref type_name } if path == "#" && type_name == "strnig"
        ));
    }

    #[test]
    fn test_string_from_temporal_with_format() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = tz.with_ymd_and_hms(2019, 1, 1, 9, 0, 0).unwrap();
        let schema = json!({"type": "string"});
        let out = type_coerce(&schema, Some("string"), Some("date-time"), instant, true, &Options::default());
        assert_eq!(out.unwrap(), json!("2019-01-01T09:00:00+09:00"));
        let out = type_coerce(&schema, Some("string"), Some("time"), instant, true, &Options::default());
        assert_eq!(out.unwrap(), json!("09:00:00+09:00"));
    }

    #[test]
    fn test_string_from_pattern() {
        let pattern = Regex::new(r"^\d+$").unwrap();
        assert_eq!(coerce("string", pattern, &Options::default()), json!(r"^\d+$"));
    }

    #[test]
    fn test_integer_and_number_from_bool() {
        let options = Options::default();
        assert_eq!(coerce("integer", true, &options), json!(1));
        assert_eq!(coerce("number", false, &options), json!(0.0));
    }

    #[test]
    fn test_empty_string_numbers() {
        let mut options = Options::default();
        assert_eq!(coerce("integer", "", &options), json!(0));
        options.empty_string_number_coerce_null = true;
        assert_eq!(coerce("integer", "", &options), Value::Null);
        assert_eq!(coerce("number", "", &options), Value::Null);
        assert_eq!(coerce("number", "1.5", &options), json!(1.5));
    }

    #[test]
    fn test_boolean_precedence() {
        let mut options = Options::default()
            .with_false_values([Input::from(""), Input::Integer(0)]);
        options.no_boolean_coerce = true;
        options.empty_string_boolean_coerce_null = true;
        // Empty string is checked before the false-value set.
        assert_eq!(coerce("boolean", "", &options), Value::Null);
        // The false-value set wins over strict mode.
        assert_eq!(coerce("boolean", "yes", &options), json!(true));
        assert_eq!(coerce("boolean", 0, &options), json!(false));
    }

    #[test]
    fn test_boolean_strict_and_truthy() {
        let mut options = Options::default();
        assert_eq!(coerce("boolean", 0, &options), json!(true));
        assert_eq!(coerce("boolean", "", &options), json!(true));
        assert_eq!(coerce("boolean", Input::Null, &options), json!(false));
        options.no_boolean_coerce = true;
        assert_eq!(coerce("boolean", "true", &options), json!(false));
        assert_eq!(coerce("boolean", true, &options), json!(true));
    }

    #[test]
    fn test_array_of_non_sequence_is_empty() {
        let schema = json!({"type": "array", "items": {"type": "integer"}});
        let out = type_coerce(&schema, Some("array"), None, json!({"a": 1}), true, &Options::default());
        assert_eq!(out.unwrap(), json!([]));
    }

    #[test]
    fn test_array_of_non_sequence_honors_null_through() {
        let options = Options {
            null_through: true,
            ..Options::default()
        };
        let schema = json!({"type": "array", "items": {"type": "integer"}});
        let out = type_coerce(&schema, Some("array"), None, json!({"a": 1}), true, &options);
        assert_eq!(out.unwrap(), Value::Null);
    }

    #[test]
    fn test_array_element_error_path() {
        let schema = json!({"type": "array", "items": {"type": "object"}});
        let err = type_coerce(&schema, Some("array"), None, json!([{}]), true, &Options::default()).unwrap_err();
        assert!(matches!(err, SerializeError::MissingProperties { ref path } if path == "#/items"));
    }

    #[test]
    fn test_object_without_properties_is_an_error() {
        let schema = json!({"type": "object"});
        let err = type_coerce(&schema, Some("object"), None, json!({}), true, &Options::default()).unwrap_err();
        assert!(matches!(err, SerializeError::MissingProperties { ref path } if path == "#"));
    }

    #[test]
    fn test_absent_object_under_null_through_skips_properties() {
        let options = Options {
            null_through: true,
            ..Options::default()
        };
        let schema = json!({"type": "object"});
        let out = type_coerce(&schema, Some("object"), None, Input::Null, true, &options);
        assert_eq!(out.unwrap(), Value::Null);
    }

    #[test]
    fn test_object_additional_properties_follow_declared() {
        let schema = json!({
            "type": "object",
            "properties": {"b": {"type": "integer"}},
            "additionalProperties": {"type": "string"}
        });
        let out = type_coerce(
            &schema,
            Some("object"),
            None,
            json!({"z": 1, "b": "2", "a": null}),
            true,
            &Options::default(),
        )
        .unwrap();
        assert_eq!(out, json!({"b": 2, "z": "1", "a": null}));
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "z", "a"]);
    }

    #[test]
    fn test_additional_properties_true_emits_nulls() {
        let schema = json!({"type": "object", "properties": {}, "additionalProperties": true});
        let out = type_coerce(&schema, Some("object"), None, json!({"x": 5}), true, &Options::default());
        assert_eq!(out.unwrap(), json!({"x": null}));
    }
}
