// SemanticException - the concrete base kind of semantic failure

use std::any::Any;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cause::Cause;
use crate::semantic::SemanticError;
use crate::wire::WireForm;

/// The base semantic failure: a message fixed at construction and an optional
/// wrapped cause.
///
/// Immutable after construction; safe to share across threads without
/// synchronization. The message lives in a private field behind a read-only
/// accessor, so nothing downstream can alter how it is computed or stored.
///
/// Serializes through [`WireForm`] so a failure can cross a process boundary
/// and be reconstructed with the same message and cause chain.
#[derive(Debug, Clone, Default, Error, Serialize, Deserialize)]
#[error("{message}")]
#[serde(from = "WireForm", into = "WireForm")]
pub struct SemanticException {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl SemanticException {
    /// Create a failure with the given message and no cause.
    ///
    /// Any string is accepted, including empty. Use `default()` for the
    /// no-description case.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a failure wrapping an underlying cause.
    ///
    /// The cause is taken over as-is; equivalence later compares it by
    /// identity of this exact `Arc` allocation, not by value.
    pub fn with_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }
}

impl SemanticError for SemanticException {
    fn message(&self) -> &str {
        &self.message
    }

    fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
