//! # Record Capability
//!
//! [`Record`] is the lookup interface for object-like inputs that are not
//! plain mappings: domain models, computed views, and the adapters that
//! injectors return. The coercer reads a record exactly like a mapping.
//!
//! ## Lookup Order
//!
//! A property `name` is resolved by [`Record::index`] (bracket access)
//! first and [`Record::field`] (named accessor) second. Implement whichever
//! fits the model; both default to "not present".

use std::fmt;

use crate::input::Input;

/// An object-like input exposing named values.
///
/// All methods have defaults, so a record only implements the capabilities
/// it actually has.
///
/// ```
/// use jss_core::{Input, Record};
///
/// #[derive(Debug)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Record for Point {
///     fn field(&self, name: &str) -> Option<Input> {
///         match name {
///             "x" => Some(self.x.into()),
///             "y" => Some(self.y.into()),
///             _ => None,
///         }
///     }
/// }
///
/// let point = Input::record(Point { x: 1, y: 2 });
/// assert_eq!(point.lookup("y"), Some(Input::Integer(2)));
/// ```
pub trait Record: fmt::Debug + Send + Sync {
    /// Bracket-style lookup by key.
    fn index(&self, _key: &str) -> Option<Input> {
        None
    }

    /// Named-accessor lookup, tried after [`Record::index`].
    fn field(&self, _name: &str) -> Option<Input> {
        None
    }

    /// Keys this record enumerates, in encounter order. Used for
    /// `additionalProperties`.
    fn keys(&self) -> Vec<String> {
        Vec::new()
    }

    /// Elements, when the record can also stand in for a sequence.
    fn elements(&self) -> Option<Vec<Input>> {
        None
    }

    /// Whether the record represents an absent value.
    fn is_null(&self) -> bool {
        false
    }

    /// Natural string form.
    fn to_display_string(&self) -> String {
        format!("{self:?}")
    }
}
