//! The [`error`](self) module contains the error type returned by matchers,
//! values and the type registry.

use thiserror::Error;

/// Result type used across this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised when a comparison or a construction can not be performed.
///
/// A candidate that simply does not match is never an error, it is reported
/// as `Ok(false)`. The variants below signal a malformed expectation instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The candidate does not implement a membership test.
    #[error("argument of type '{type_name}' does not support membership tests")]
    NotAContainer { type_name: String },

    /// The container supports membership tests, but not for the passed needle.
    #[error("'in <{container}>' requires {expected} as left operand, not {found}")]
    IncompatibleNeedle {
        container: String,
        expected: &'static str,
        found: String,
    },

    /// The value was used as set member or map key but can not be hashed.
    #[error("unhashable type: '{type_name}'")]
    Unhashable { type_name: String },

    /// A type with the same name is already part of the type registry.
    #[error("type '{0}' is already registered")]
    DuplicateType(String),

    /// No type with the passed name is part of the type registry.
    #[error("unknown type '{0}'")]
    UnknownType(String),
}
