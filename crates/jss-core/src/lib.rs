//! # jss-core — Input Model for Schema-Guided Serialization
//!
//! This crate defines the values the serializer walks over. Inputs are
//! loosely typed on purpose: a field declared as `integer` may arrive as a
//! string, a float, a boolean, or not at all, and the serializer must still
//! produce an integer.
//!
//! ## Key Design Principles
//!
//! 1. **One closed input enum.** [`Input`] covers every runtime shape the
//!    coercer distinguishes: absent, boolean, integer, float, string,
//!    temporal, pattern, sequence, mapping, record, and context carrier.
//!
//! 2. **Capabilities, not concrete types.** Object-like inputs that are not
//!    plain mappings implement [`Record`]. Lookups try bracket access first
//!    and named accessors second, so the coercer never branches on what the
//!    caller's model actually is.
//!
//! 3. **Explicit context carriers.** [`DataWithContext`] pairs a value with a
//!    context for nested injectors. It is a variant of [`Input`], never
//!    detected by inspecting arbitrary objects.
//!
//! 4. **Total conversions.** Every lenient conversion (`to_i64_lossy`,
//!    `to_f64_lossy`, natural string form) maps every input to some value.
//!    Parse failures produce zero, not errors.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jss-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod context;
pub mod convert;
pub mod error;
pub mod input;
pub mod record;
pub mod temporal;

pub use context::{with_context, with_context_fn, DataWithContext};
pub use error::InputError;
pub use input::{Input, InputMap};
pub use record::Record;
pub use temporal::Temporal;
