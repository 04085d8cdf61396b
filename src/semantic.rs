// SemanticError trait - the open seam of the semantic failure hierarchy

use std::any::Any;
use std::error::Error;
use std::ptr;

use crate::cause::{same_cause, Cause};

/// A failure related to semantics: the nominal effect of an operation could
/// not be reached, because doing so under the given circumstances would
/// violate semantics (often type invariants).
///
/// Concrete failure kinds implement this trait. The base kind is
/// [`SemanticException`](crate::SemanticException); kinds that narrow the
/// circumstance add fields and strengthen [`like`](SemanticError::like).
pub trait SemanticError: Error + Send + Sync {
    /// The human-readable description of the failure.
    ///
    /// Fixed at construction. The base kind stores it in a private field with
    /// no overridable hook, so no kind in the hierarchy can change how the
    /// message of an already-constructed failure reads.
    fn message(&self) -> &str;

    /// The wrapped underlying error, if any.
    fn cause(&self) -> Option<&Cause> {
        None
    }

    /// Legacy string-code alias for [`message`](SemanticError::message).
    ///
    /// Always equal to `message()`. Kept only so call sites migrating away
    /// from a code-based error model keep working; new code must use
    /// `message()`.
    #[deprecated(note = "exception_code is deprecated, use message instead")]
    fn exception_code(&self) -> &str {
        self.message()
    }

    /// Concrete-kind handle for runtime type identification and downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Structural equivalence: are `self` and `other` the same kind of
    /// problem, beyond reference identity?
    ///
    /// The base contract, in order:
    /// 1. absent `other`, or a different concrete kind, is never alike;
    /// 2. the same instance is always alike;
    /// 3. otherwise alike iff the messages are equal and the causes are the
    ///    identical instance (both absent also qualifies).
    ///
    /// Kinds that add fields must override this, call [`base_like`] first and
    /// return false immediately if it does, then compare their own fields.
    /// That convention is what makes equivalence compose down the hierarchy;
    /// it is enforced by code review and tests, not by the type system.
    fn like(&self, other: Option<&dyn SemanticError>) -> bool {
        base_like(self, other)
    }
}

/// The base equivalence check shared by every kind in the hierarchy.
///
/// Overrides of [`SemanticError::like`] call this first; the default `like`
/// body is exactly this check.
pub fn base_like<E>(this: &E, other: Option<&dyn SemanticError>) -> bool
where
    E: SemanticError + ?Sized,
{
    let Some(other) = other else {
        return false;
    };
    // Exact concrete kind match. A compatible-subkind policy was considered
    // and rejected: equivalence across kinds breaks symmetry once a subkind
    // strengthens the check.
    if this.as_any().type_id() != other.as_any().type_id() {
        return false;
    }
    if ptr::addr_eq(this.as_any() as *const dyn Any, other.as_any() as *const dyn Any) {
        return true;
    }
    this.message() == other.message()
        && same_cause(SemanticError::cause(this), SemanticError::cause(other))
}
