//! Property store errors.

use super::value::ValueKind;

/// Errors from property registration, reads and writes.
///
/// All of these are contract violations by the component author; none is
/// transient and none is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("property {0} is not nullable and has no value")]
    Uninitialized(String),
    #[error("property {0} is not nullable and cannot be cleared")]
    RequiredValueMissing(String),
    #[error("property {name} holds {expected} values, got {found}")]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("property {0} is already registered")]
    AlreadyRegistered(String),
}
