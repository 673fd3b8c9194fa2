//! # Serializer
//!
//! Binds a resolved root schema to a set of [`Options`]. Construction runs
//! the resolver once; every `serialize` call afterwards is a pure walk that
//! borrows both, so a `Serializer` can be shared across threads.

use jss_core::Input;
use serde::Serialize;
use serde_json::Value;

use crate::error::SerializeError;
use crate::options::{Options, SerializerConfig};
use crate::schema::ROOT_PATH;
use crate::walker::Walker;

/// A schema ready to coerce inputs.
#[derive(Debug, Clone)]
pub struct Serializer {
    schema: Value,
    options: Options,
}

impl Serializer {
    /// Build a serializer, applying `options.resolver` to `schema` if set.
    ///
    /// # Errors
    ///
    /// Returns `SerializeError::Resolver` if the resolver fails.
    pub fn new(schema: Value, options: Options) -> Result<Self, SerializeError> {
        let schema = match &options.resolver {
            Some(resolver) => {
                tracing::debug!("resolving root schema");
                resolver(schema).map_err(SerializeError::Resolver)?
            }
            None => schema,
        };
        tracing::debug!(
            root_type = ?schema.get("type"),
            injectors = options.injectors.len(),
            "serializer constructed"
        );
        Ok(Self { schema, options })
    }

    /// Build a serializer from a declarative config.
    ///
    /// # Errors
    ///
    /// Same as [`Serializer::new`]. A config never carries a resolver, so in
    /// practice this does not fail.
    pub fn from_config(schema: Value, config: SerializerConfig) -> Result<Self, SerializeError> {
        Self::new(schema, Options::from_config(config))
    }

    /// The resolved root schema.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// The options in effect.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Coerce `value` into the shape the root schema declares.
    ///
    /// The root is always treated as required.
    ///
    /// # Errors
    ///
    /// `MissingProperties` or `UnknownType` for schemas the walker cannot
    /// interpret, `Injection` when an injector rejects a value.
    pub fn serialize(&self, value: impl Into<Input>) -> Result<Value, SerializeError> {
        Walker::new(&self.options).walk(
            &self.schema,
            value.into(),
            true,
            self.options.root_context(),
            ROOT_PATH,
        )
    }

    /// Coerce any serde-serializable value.
    ///
    /// # Errors
    ///
    /// As [`Serializer::serialize`], plus `Input` when `value` cannot be
    /// converted to an input tree.
    pub fn serialize_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, SerializeError> {
        let input = Input::from_serialize(&value)?;
        self.serialize(input)
    }
}
