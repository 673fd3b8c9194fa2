//! # Error Types
//!
//! Coercion itself is total: every input maps to some output. Errors are
//! reserved for schemas the walker cannot interpret and for failures in
//! caller-supplied callbacks. Every schema-related variant carries the
//! JSON-pointer path of the offending node (e.g. `#/properties/a/items`).

use jss_core::InputError;
use thiserror::Error;

use crate::inject::InjectError;

/// Error returned by a schema resolver callback.
pub type ResolveError = Box<dyn std::error::Error + Send + Sync>;

/// Error during serializer construction or serialization.
#[derive(Error, Debug)]
pub enum SerializeError {
    /// An `object` node has no `properties` mapping.
    #[error("object schema at {path} has no `properties`")]
    MissingProperties {
        /// Schema path of the node.
        path: String,
    },

    /// The resolved type is not one of `null`, `string`, `integer`,
    /// `number`, `boolean`, `array`, `object`.
    #[error("unknown type {type_name:?} at {path}")]
    UnknownType {
        /// Schema path of the node.
        path: String,
        /// The type name as declared.
        type_name: String,
    },

    /// The resolver callback could not produce a root schema.
    #[error("schema resolver failed: {0}")]
    Resolver(#[source] ResolveError),

    /// An injector refused to wrap a value.
    #[error("injector {id:?} failed at {path}: {source}")]
    Injection {
        /// Injector id named by the schema.
        id: String,
        /// Schema path of the node.
        path: String,
        /// The injector's error.
        #[source]
        source: InjectError,
    },

    /// A domain object could not be converted into an input tree.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A declarative config document could not be parsed.
    #[error("invalid serializer config: {0}")]
    Config(String),
}
