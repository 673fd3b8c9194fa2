//! # Injectors
//!
//! An injector is an adapter the schema names by id (through the field
//! configured as `Options::inject_key`). Before a node is coerced, the raw
//! input is handed to the injector and the injector's result becomes the
//! subject of type detection and coercion. The usual result is an
//! [`Input::Record`] view whose accessors compute derived fields, so an
//! `object` node reads `view.field("total")` as if it were a property of
//! the raw value.
//!
//! ## Construction
//!
//! There is one canonical contract, `(data, context) -> view`. Injectors
//! that prefer named arguments override [`Injector::inject_by_keyword`];
//! the serializer calls it instead of [`Injector::inject`] when
//! `Options::inject_by_keyword` is set.
//!
//! Injection never runs on a value that came from a schema `default`.

use jss_core::Input;
use serde_json::Value;
use thiserror::Error;

/// Error raised by an injector.
#[derive(Error, Debug)]
pub enum InjectError {
    /// The injector cannot adapt this value.
    #[error("value rejected: {0}")]
    Rejected(String),

    /// Any other failure inside the injector.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Named construction arguments.
#[derive(Debug, Clone)]
pub struct InjectArgs<'a> {
    /// The raw input bound to the schema node.
    pub data: Input,
    /// The context in effect for this subtree, if any.
    pub context: Option<&'a Value>,
}

/// Adapter that wraps a raw input before coercion.
pub trait Injector: Send + Sync {
    /// Positional construction.
    fn inject(&self, data: Input, context: Option<&Value>) -> Result<Input, InjectError>;

    /// Keyword construction. Defaults to [`Injector::inject`].
    fn inject_by_keyword(&self, args: InjectArgs<'_>) -> Result<Input, InjectError> {
        self.inject(args.data, args.context)
    }
}

/// Injector backed by a closure. Built with [`injector_fn`].
pub struct FnInjector<F>(F);

impl<F> Injector for FnInjector<F>
where
    F: Fn(Input, Option<&Value>) -> Result<Input, InjectError> + Send + Sync,
{
    fn inject(&self, data: Input, context: Option<&Value>) -> Result<Input, InjectError> {
        (self.0)(data, context)
    }
}

/// Build an injector from a closure.
///
/// ```
/// use jss_serializer::{injector_fn, Input, Injector};
///
/// let upper = injector_fn(|data, _context| Ok(Input::from(data.to_string().to_uppercase())));
/// assert_eq!(upper.inject(Input::from("abc"), None).unwrap(), Input::from("ABC"));
/// ```
pub fn injector_fn<F>(f: F) -> FnInjector<F>
where
    F: Fn(Input, Option<&Value>) -> Result<Input, InjectError> + Send + Sync,
{
    FnInjector(f)
}
