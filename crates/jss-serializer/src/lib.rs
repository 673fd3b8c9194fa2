//! # jss-serializer — Schema-Guided Data Coercion
//!
//! Walks a JSON-Schema-like description and produces a value whose shape
//! and primitive types match it exactly, whatever the input looked like.
//! It does not validate: every input maps to some output. Missing fields are
//! filled with zero values or `null`, wrong-typed fields are converted, and
//! object keys follow the schema's `properties` order.
//!
//! ```
//! use jss_serializer::{Options, Serializer};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "name": {"type": "string"},
//!         "count": {"type": "integer"},
//!         "tags": {"type": "array", "items": {"type": "string"}}
//!     },
//!     "required": ["name", "tags"]
//! });
//! let serializer = Serializer::new(schema, Options::default()).unwrap();
//! let out = serializer.serialize(json!({"name": 42, "tags": [1, true]})).unwrap();
//! assert_eq!(out, json!({"name": "42", "count": null, "tags": ["1", "true"]}));
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Stateless walk.** [`Serializer`] owns the schema and [`Options`];
//!    each call builds a walker borrowing both. No process-wide state.
//!
//! 2. **Union types track the input.** `["string", "null"]` resolves per
//!    value through a fixed preference table ([`detect_type`]).
//!
//! 3. **Explicit failure modes.** Only uninterpretable schemas and
//!    failing callbacks produce a [`SerializeError`], and each error names
//!    the schema path it came from.
//!
//! 4. **Injectors are one trait.** An [`Injector`] maps `(data, context)` to
//!    a view that the object branch reads like a record.
//!
//! ## Crate Policy
//!
//! - Depends only on `jss-core` internally.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The library emits `tracing` events but never installs a subscriber.

mod coerce;
pub mod error;
pub mod inject;
pub mod options;
pub mod resolve;
mod schema;
pub mod serializer;
mod walker;

// Re-export primary types for ergonomic imports.
pub use coerce::type_coerce;
pub use error::{ResolveError, SerializeError};
pub use inject::{injector_fn, FnInjector, InjectArgs, InjectError, Injector};
pub use options::{KeyCase, KeyTransform, Options, Resolver, SerializerConfig};
pub use resolve::{detect_type, SchemaType, ValueKind};
pub use serializer::Serializer;

pub use jss_core::{with_context, with_context_fn, DataWithContext, Input, InputMap, Record, Temporal};
