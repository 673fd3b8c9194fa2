//! # Context Carriers
//!
//! Injectors sometimes need parameters that do not live in the data, such
//! as a code table or a locale. A [`DataWithContext`] carries such a
//! context alongside a value. When the serializer reaches a carrier it
//! unwraps the data and uses the context for every injector below that
//! point, until another carrier replaces it.

use serde_json::Value;

use crate::input::Input;

/// A value paired with the context nested injectors should receive.
#[derive(Debug, Clone, PartialEq)]
pub struct DataWithContext {
    /// The value to coerce.
    pub data: Input,
    /// Context for injectors in this subtree. `null` clears the context.
    pub context: Value,
}

impl DataWithContext {
    /// Pair `data` with `context`.
    pub fn new(data: impl Into<Input>, context: Value) -> Self {
        Self {
            data: data.into(),
            context,
        }
    }

    /// Split into data and context.
    pub fn into_parts(self) -> (Input, Value) {
        (self.data, self.context)
    }
}

impl<D: Into<Input>> From<(D, Value)> for DataWithContext {
    fn from((data, context): (D, Value)) -> Self {
        Self::new(data, context)
    }
}

/// Wrap `data` so that injectors beneath it see `context`.
pub fn with_context(data: impl Into<Input>, context: Value) -> Input {
    Input::from(DataWithContext::new(data, context))
}

/// Like [`with_context`], with the data produced by `build`.
///
/// Reads well when the data is assembled inline:
///
/// ```
/// use jss_core::{with_context_fn, Input};
/// use serde_json::json;
///
/// let input = with_context_fn(json!({"lang": "ja"}), || vec![1, 2]);
/// assert_eq!(input.elements().map(|e| e.len()), Some(2));
/// ```
pub fn with_context_fn<D: Into<Input>>(context: Value, build: impl FnOnce() -> D) -> Input {
    with_context(build(), context)
}
