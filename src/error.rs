use thiserror::Error;

use crate::registry::Pair;
use crate::value::Tag;

/// Errors from populating a [`Registry`](crate::Registry).
///
/// Both variants are usage errors: they propagate at registration time and
/// are never silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Registration attempted against the canonical tag order.
    #[error(
        "cannot register comparison for ({first}, {second}): \
         tags are out of canonical order, register ({second}, {first}) instead"
    )]
    OutOfOrder { first: Tag, second: Tag },

    /// The pair already has an implementation.
    #[error("a comparison for {pair} is already registered")]
    Duplicate { pair: Pair },
}

/// Errors from [`compare`](crate::compare()) and the operations built on it.
///
/// These are programmer errors, not recoverable runtime conditions: the
/// caller compared two types with no defined relation, or the registry was
/// corrupted. They terminate the current operation and are never retried or
/// defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// No implementation is registered for the canonical pair.
    #[error("no comparison implementation exists for {left} and {right}")]
    NoImplementation { left: Tag, right: Tag },

    /// A stored implementation self-reports a different pair than the key
    /// it was found under.
    #[error("comparison looked up for {expected} identifies itself as {found}")]
    MalformedImplementation { expected: Pair, found: Pair },
}
