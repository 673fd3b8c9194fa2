//! # Serializer Options
//!
//! [`Options`] holds every toggle and callback that affects a walk. All of
//! them default to disabled. Callbacks (resolver, key transforms,
//! injectors) can only be set in code; the declarative subset lives in
//! [`SerializerConfig`], which deserializes from JSON or YAML and converts
//! with [`Options::from_config`].
//!
//! ```yaml
//! inject_key: injects
//! null_through: true
//! false_values: [false, "", 0, null]
//! schema_key_transform_for_input: snake_case
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use jss_core::Input;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ResolveError, SerializeError};
use crate::inject::Injector;

/// Callback mapping a schema property name to an input or output key.
pub type KeyTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Callback turning the raw schema into the root schema node.
pub type Resolver = Arc<dyn Fn(Value) -> Result<Value, ResolveError> + Send + Sync>;

/// Options for one [`Serializer`](crate::Serializer).
#[derive(Clone, Default)]
pub struct Options {
    /// Applied once, at construction, to the raw schema.
    pub resolver: Option<Resolver>,
    /// Schema field naming an injector id.
    pub inject_key: Option<String>,
    /// Injectors by id.
    pub injectors: HashMap<String, Arc<dyn Injector>>,
    /// Context handed to injectors until a carrier replaces it.
    pub inject_context: Option<Value>,
    /// Call [`Injector::inject_by_keyword`] instead of [`Injector::inject`].
    pub inject_by_keyword: bool,
    /// Absent input stays absent for every type instead of becoming the
    /// type's zero value.
    pub null_through: bool,
    /// `""` into `integer`/`number` yields the absent-marker instead of 0.
    pub empty_string_number_coerce_null: bool,
    /// `""` into `boolean` yields the absent-marker.
    pub empty_string_boolean_coerce_null: bool,
    /// Values considered false; every other value is true.
    pub false_values: Option<Vec<Input>>,
    /// Only a literal `true` is true.
    pub no_boolean_coerce: bool,
    /// A primitive where an array/object is expected yields an empty
    /// container (or the absent-marker with `null_through`).
    pub guard_primitive_in_structure: bool,
    /// Maps a property name to the key looked up in the input.
    pub input_key_transform: Option<KeyTransform>,
    /// Maps a property name to the key written to the output.
    pub output_key_transform: Option<KeyTransform>,
}

impl Options {
    /// Build options from a declarative config.
    pub fn from_config(config: SerializerConfig) -> Self {
        Options {
            resolver: None,
            inject_key: config.inject_key,
            injectors: HashMap::new(),
            inject_context: config.inject_context,
            inject_by_keyword: config.inject_by_keyword,
            null_through: config.null_through,
            empty_string_number_coerce_null: config.empty_string_number_coerce_null,
            empty_string_boolean_coerce_null: config.empty_string_boolean_coerce_null,
            false_values: config
                .false_values
                .map(|values| values.into_iter().map(Input::from).collect()),
            no_boolean_coerce: config.no_boolean_coerce,
            guard_primitive_in_structure: config.guard_primitive_in_structure,
            input_key_transform: config.input_key_transform.map(KeyCase::into_transform),
            output_key_transform: config.output_key_transform.map(KeyCase::into_transform),
        }
    }

    /// Set the schema resolver.
    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Set the schema field that names injectors.
    pub fn with_inject_key(mut self, key: impl Into<String>) -> Self {
        self.inject_key = Some(key.into());
        self
    }

    /// Register an injector under `id`.
    pub fn with_injector(mut self, id: impl Into<String>, injector: impl Injector + 'static) -> Self {
        self.injectors.insert(id.into(), Arc::new(injector));
        self
    }

    /// Set the initial injector context.
    pub fn with_inject_context(mut self, context: Value) -> Self {
        self.inject_context = Some(context);
        self
    }

    /// Set the values treated as false by boolean coercion.
    pub fn with_false_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Input>,
    {
        self.false_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the property-name-to-input-key transform.
    pub fn with_input_key_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.input_key_transform = Some(Arc::new(transform));
        self
    }

    /// Set the property-name-to-output-key transform.
    pub fn with_output_key_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.output_key_transform = Some(Arc::new(transform));
        self
    }

    pub(crate) fn input_key(&self, name: &str) -> String {
        match &self.input_key_transform {
            Some(transform) => transform(name),
            None => name.to_string(),
        }
    }

    pub(crate) fn output_key(&self, name: &str) -> String {
        match &self.output_key_transform {
            Some(transform) => transform(name),
            None => name.to_string(),
        }
    }

    /// The context in effect at the root. A `null` context counts as none.
    pub(crate) fn root_context(&self) -> Option<&Value> {
        self.inject_context.as_ref().filter(|c| !c.is_null())
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut injector_ids: Vec<&str> = self.injectors.keys().map(String::as_str).collect();
        injector_ids.sort_unstable();
        f.debug_struct("Options")
            .field("resolver", &self.resolver.is_some())
            .field("inject_key", &self.inject_key)
            .field("injectors", &injector_ids)
            .field("inject_context", &self.inject_context)
            .field("inject_by_keyword", &self.inject_by_keyword)
            .field("null_through", &self.null_through)
            .field("empty_string_number_coerce_null", &self.empty_string_number_coerce_null)
            .field("empty_string_boolean_coerce_null", &self.empty_string_boolean_coerce_null)
            .field("false_values", &self.false_values)
            .field("no_boolean_coerce", &self.no_boolean_coerce)
            .field("guard_primitive_in_structure", &self.guard_primitive_in_structure)
            .field("input_key_transform", &self.input_key_transform.is_some())
            .field("output_key_transform", &self.output_key_transform.is_some())
            .finish()
    }
}

/// Declarative subset of [`Options`].
///
/// Both spellings of the key transform options are accepted
/// (`input_key_transform` or `schema_key_transform_for_input`, likewise for
/// output).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerConfig {
    /// See [`Options::inject_key`].
    pub inject_key: Option<String>,
    /// See [`Options::inject_context`].
    pub inject_context: Option<Value>,
    /// See [`Options::inject_by_keyword`].
    pub inject_by_keyword: bool,
    /// See [`Options::null_through`].
    pub null_through: bool,
    /// See [`Options::empty_string_number_coerce_null`].
    pub empty_string_number_coerce_null: bool,
    /// See [`Options::empty_string_boolean_coerce_null`].
    pub empty_string_boolean_coerce_null: bool,
    /// See [`Options::false_values`].
    pub false_values: Option<Vec<Value>>,
    /// See [`Options::no_boolean_coerce`].
    pub no_boolean_coerce: bool,
    /// See [`Options::guard_primitive_in_structure`].
    pub guard_primitive_in_structure: bool,
    /// Named input key transform.
    #[serde(alias = "schema_key_transform_for_input")]
    pub input_key_transform: Option<KeyCase>,
    /// Named output key transform.
    #[serde(alias = "schema_key_transform_for_output")]
    pub output_key_transform: Option<KeyCase>,
}

impl SerializerConfig {
    /// Parse a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `SerializeError::Config` on malformed JSON or unknown fields.
    pub fn from_json_str(s: &str) -> Result<Self, SerializeError> {
        serde_json::from_str(s).map_err(|e| SerializeError::Config(e.to_string()))
    }

    /// Parse a YAML config document.
    ///
    /// # Errors
    ///
    /// Returns `SerializeError::Config` on malformed YAML or unknown fields.
    pub fn from_yaml_str(s: &str) -> Result<Self, SerializeError> {
        serde_yaml::from_str(s).map_err(|e| SerializeError::Config(e.to_string()))
    }
}

/// Named key transforms available to declarative configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCase {
    /// `userCount` → `usercount`
    Lowercase,
    /// `userCount` → `USERCOUNT`
    Uppercase,
    /// `userCount` → `user_count`
    SnakeCase,
    /// `user_count` → `userCount`
    CamelCase,
}

impl KeyCase {
    /// Apply the transform to a key.
    pub fn apply(self, name: &str) -> String {
        match self {
            KeyCase::Lowercase => name.to_lowercase(),
            KeyCase::Uppercase => name.to_uppercase(),
            KeyCase::SnakeCase => to_snake_case(name),
            KeyCase::CamelCase => to_camel_case(name),
        }
    }

    fn into_transform(self) -> KeyTransform {
        Arc::new(move |name: &str| self.apply(name))
    }
}

fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1);
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c == '-' || c == ' ' {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}

fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if matches!(c, '_' | '-' | ' ') {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else if out.is_empty() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
