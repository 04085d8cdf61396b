// Cause handling - the wrapped underlying error of a semantic failure

use std::error::Error;
use std::sync::Arc;

/// The underlying error a semantic failure wraps, explaining its root origin.
///
/// Held by `Arc` so that cause identity is observable: the equivalence
/// contract compares causes by allocation, not by value. Ownership of the
/// cause is handed over at construction and never mutated afterwards, so no
/// cycles can be formed.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Compare two optional causes by identity.
///
/// Returns true when both are absent, or both point at the identical cause
/// allocation. Two distinct-but-value-equal causes compare as different.
pub fn same_cause(a: Option<&Cause>, b: Option<&Cause>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_cause(msg: &str) -> Cause {
        Arc::new(io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn test_both_absent_are_same() {
        assert!(same_cause(None, None));
    }

    #[test]
    fn test_identical_allocation_is_same() {
        let cause = io_cause("disk full");
        let alias = Arc::clone(&cause);
        assert!(same_cause(Some(&cause), Some(&alias)));
    }

    #[test]
    fn test_value_equal_but_distinct_is_not_same() {
        let a = io_cause("disk full");
        let b = io_cause("disk full");
        assert!(!same_cause(Some(&a), Some(&b)));
    }

    #[test]
    fn test_present_vs_absent_is_not_same() {
        let cause = io_cause("disk full");
        assert!(!same_cause(Some(&cause), None));
        assert!(!same_cause(None, Some(&cause)));
    }
}
