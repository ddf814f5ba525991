//! The [`matcher`](self) module contains the matchers that act as wildcards
//! when comparing call arguments.
//!
//! Every matcher implements [`Matcher`] and can be placed on either side of
//! `==` or `!=` with a [`Value`] (or a plain `bool`, `i32`, `i64`, `f64`,
//! `&str` or `String`):
//!
//! ```
//! use mockextras::matcher::{any, contains};
//! use mockextras::{any_of, Value};
//!
//! assert!(any() == "hello");
//! assert!(Value::list([1, 2]) == any());
//! assert!(contains("ello") == "hello");
//! assert!("bye bye" != contains("ello"));
//! assert!(any_of![1, 2, 3].unwrap() == 2);
//! ```
//!
//! The operators panic if the candidate does not support the comparison,
//! e.g. a [`Contains`] matcher compared against an integer. Use
//! [`Matcher::matches`] to receive the [`Error`](crate::Error) instead.

mod any;
mod any_of;
mod contains;

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::error::Result;
use crate::value::Value;

pub use any::{any, instance_of, Any};
pub use any_of::AnyOf;
pub use contains::{contains, Contains};

/// A matcher is used to check if the passed candidate matches a pre-defined
/// expectation. It is mostly used to verify the arguments of a call or to
/// select a stubbed result.
pub trait Matcher: Debug + Send + Sync {
    /// Returns `Ok(true)` if the passed `value` matches the expectations,
    /// `Ok(false)` otherwise.
    ///
    /// # Errors
    /// Returns an error if the candidate can not be compared by this matcher.
    fn matches(&self, value: &Value) -> Result<bool>;

    /// Inverse of [`matches`](Matcher::matches).
    ///
    /// # Errors
    /// Returns an error if the candidate can not be compared by this matcher.
    fn not_matches(&self, value: &Value) -> Result<bool> {
        self.matches(value).map(|matched| !matched)
    }

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

impl Display for dyn Matcher + '_ {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(self, f)
    }
}

/// Emits the outcome of a matcher evaluation and passes it through.
fn traced(matcher: &dyn Matcher, value: &Value, result: Result<bool>) -> Result<bool> {
    match &result {
        Ok(matched) => tracing::trace!(
            matcher = %matcher,
            candidate = %value,
            matched,
            "evaluated matcher"
        ),
        Err(error) => tracing::trace!(
            matcher = %matcher,
            candidate = %value,
            %error,
            "matcher failed"
        ),
    }

    result
}

/// Turns the result of a comparison into the `bool` expected by [`PartialEq`].
///
/// # Panics
/// Panics if the comparison failed.
pub(crate) fn expect_comparable(
    result: Result<bool>,
    lhs: &dyn Display,
    rhs: &dyn Display,
) -> bool {
    match result {
        Ok(matched) => matched,
        Err(error) => panic!("Unable to compare {lhs} with {rhs}: {error}"),
    }
}

/// Implements [`Display`] and the symmetric `==`/`!=` operators for a matcher.
macro_rules! impl_matcher_ops {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::matcher::Matcher::fmt(self, f)
            }
        }

        impl PartialEq<$crate::Value> for $type {
            fn eq(&self, other: &$crate::Value) -> bool {
                $crate::matcher::expect_comparable(
                    $crate::matcher::Matcher::matches(self, other),
                    self,
                    other,
                )
            }

            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &$crate::Value) -> bool {
                $crate::matcher::expect_comparable(
                    $crate::matcher::Matcher::not_matches(self, other),
                    self,
                    other,
                )
            }
        }

        impl PartialEq<$type> for $crate::Value {
            fn eq(&self, other: &$type) -> bool {
                other == self
            }

            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &$type) -> bool {
                other != self
            }
        }

        $crate::matcher::impl_matcher_ops!($type: bool, i32, i64, f64, &str, String);
    };
    ($type:ty: $( $primitive:ty ),+) => {
        $(
            impl PartialEq<$primitive> for $type {
                fn eq(&self, other: &$primitive) -> bool {
                    *self == $crate::Value::from(other.to_owned())
                }

                #[allow(clippy::partialeq_ne_impl)]
                fn ne(&self, other: &$primitive) -> bool {
                    *self != $crate::Value::from(other.to_owned())
                }
            }

            impl PartialEq<$type> for $primitive {
                fn eq(&self, other: &$type) -> bool {
                    *other == $crate::Value::from(self.to_owned())
                }

                #[allow(clippy::partialeq_ne_impl)]
                fn ne(&self, other: &$type) -> bool {
                    *other != $crate::Value::from(self.to_owned())
                }
            }
        )+
    };
}

pub(crate) use impl_matcher_ops;
