//! # The Walker
//!
//! One recursive step per schema node:
//!
//! 1. An absent value takes the node's `default`.
//! 2. A context carrier is unwrapped. Its context replaces the inherited one
//!    for this subtree and the default is re-applied if the carried data is
//!    absent.
//! 3. If the node names an injector through `Options::inject_key`, the
//!    injector wraps the value. Values that were absent on arrival are never
//!    injected.
//! 4. The declared type is resolved against the (possibly wrapped) value.
//! 5. The value is coerced, recursing into `items` and `properties`.
//!
//! The walker holds nothing but a borrow of the options. Context is passed
//! down explicitly, so a single walker serves any number of concurrent walks.

use std::sync::Arc;

use jss_core::Input;
use serde_json::Value;

use crate::error::SerializeError;
use crate::inject::InjectArgs;
use crate::options::Options;
use crate::resolve::detect_type;
use crate::schema::SchemaNode;

pub(crate) struct Walker<'o> {
    pub(crate) options: &'o Options,
}

impl<'o> Walker<'o> {
    pub(crate) fn new(options: &'o Options) -> Self {
        Self { options }
    }

    pub(crate) fn walk(
        &self,
        schema: &Value,
        value: Input,
        required: bool,
        context: Option<&Value>,
        path: &str,
    ) -> Result<Value, SerializeError> {
        let node = SchemaNode::new(schema);
        let defaulted = value.is_absent();
        let mut value = substitute_default(value, node);

        let carrier = match &value {
            Input::WithContext(carrier) => Some(Arc::clone(carrier)),
            _ => None,
        };
        let mut context = context;
        if let Some(carrier) = &carrier {
            context = Some(&carrier.context).filter(|c| !c.is_null());
            value = substitute_default(carrier.data.clone(), node);
        }
        let defaulted = defaulted || carrier.as_ref().is_some_and(|c| c.data.is_absent());

        if let Some(id) = self.injector_id(node) {
            match self.options.injectors.get(id) {
                None => tracing::warn!(injector = id, path, "no injector registered under this id; coercing the raw value"),
                Some(_) if defaulted => {}
                Some(injector) => {
                    tracing::debug!(injector = id, path, "wrapping value with injector");
                    let injected = if self.options.inject_by_keyword {
                        injector.inject_by_keyword(InjectArgs { data: value, context })
                    } else {
                        injector.inject(value, context)
                    };
                    value = injected.map_err(|source| SerializeError::Injection {
                        id: id.to_string(),
                        path: path.to_string(),
                        source,
                    })?;
                }
            }
        }

        let resolved = detect_type(node.declared_type(), &value);
        tracing::trace!(path, resolved_type = resolved.unwrap_or("-"), "coercing node");
        self.coerce(node, resolved, node.format(), value, required, context, path)
    }

    fn injector_id<'s>(&self, node: SchemaNode<'s>) -> Option<&'s str> {
        let key = self.options.inject_key.as_deref()?;
        node.get(key).and_then(Value::as_str)
    }
}

fn substitute_default(value: Input, node: SchemaNode<'_>) -> Input {
    match node.default_value() {
        Some(default) if value.is_absent() => Input::from(default),
        _ => value,
    }
}
