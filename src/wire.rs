// Wire form - how a semantic failure crosses a process or transport boundary

use std::error::Error;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::exception::SemanticException;

/// Transport representation of a semantic failure: the message plus the
/// flattened cause chain.
///
/// Serialization walks `Error::source` and keeps each link's message;
/// deserialization rebuilds the chain as nested [`SemanticException`] causes.
/// Messages survive the round trip exactly. Cause *identity* cannot: the
/// reconstructed chain is a fresh allocation, so `like` across a boundary
/// holds only for failures without a cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireForm {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<WireForm>>,
}

fn encode_chain(err: &(dyn Error + 'static)) -> WireForm {
    WireForm {
        message: err.to_string(),
        cause: err.source().map(|source| Box::new(encode_chain(source))),
    }
}

impl From<SemanticException> for WireForm {
    fn from(failure: SemanticException) -> Self {
        encode_chain(&failure)
    }
}

impl From<WireForm> for SemanticException {
    fn from(wire: WireForm) -> Self {
        match wire.cause {
            None => SemanticException::new(wire.message),
            Some(cause) => SemanticException::with_cause(
                wire.message,
                Arc::new(SemanticException::from(*cause)),
            ),
        }
    }
}
