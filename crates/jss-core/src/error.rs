//! # Error Types
//!
//! Conversions inside the input model are total, so the only failure is
//! turning an arbitrary `Serialize` value into an [`Input`](crate::Input).

use thiserror::Error;

/// Error while building an input tree from a domain object.
#[derive(Error, Debug)]
pub enum InputError {
    /// The value could not be serialized into an intermediate JSON tree.
    #[error("input conversion failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
