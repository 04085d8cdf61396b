// Semantic Exception - base type for failures where an operation's nominal
// effect could not be reached because producing it would violate semantics
// (preconditions, type invariants).
//
// NO runtime, NO I/O - pure value types plus a serialization wire form.

pub mod cause;
pub mod exception;
pub mod semantic;
pub mod wire;

pub use cause::{same_cause, Cause};
pub use exception::SemanticException;
pub use semantic::{base_like, SemanticError};
pub use wire::WireForm;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
