//! The [`call`](self) module contains the types that describe the signature of
//! a call: the arguments a mocked function was called with, or the arguments
//! an expectation or a stub entry is defined for.
//!
//! [`Call`] is the point where the host's `==` is delegated to the matchers.
//! Stub tables and assertion helpers compare `Call` values (or lists of them)
//! and every matcher inside an argument slot is evaluated against the value
//! on the other side:
//!
//! ```
//! use mockextras::{call, matcher::any};
//!
//! let recorded = vec![call!("bye bye", "world"), call!("bye bye", "Fred")];
//! let expected = vec![call!("bye bye", any()), call!("bye bye", any())];
//!
//! assert_eq!(recorded, expected);
//! assert_eq!(expected, recorded);
//! ```

mod arg;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;

use crate::error::Result;
use crate::matcher::expect_comparable;

pub use arg::Arg;

/// Create a new [`Call`] from positional arguments, optionally followed by
/// keyword arguments after a `;`.
///
/// Every argument is converted using [`Arg::from`], so plain values and
/// matchers may be mixed freely.
///
/// ```
/// use mockextras::{call, matcher::contains};
///
/// let call = call!("log", contains("error"); level = 3);
/// assert_eq!(call.to_string(), r#"call("log", Contains("error"), level=3)"#);
/// ```
#[macro_export]
macro_rules! call {
    ($( $arg:expr ),* ; $( $name:ident = $kwarg:expr ),* $(,)?) => {
        $crate::call!($( $arg ),*)
            $( .with_kwarg(stringify!($name), $crate::call::Arg::from($kwarg)) )*
    };
    ($( $arg:expr ),* $(,)?) => {
        $crate::call::Call::new::<_, $crate::call::Arg>([
            $( $crate::call::Arg::from($arg) ),*
        ])
    };
}

/// Positional and keyword arguments of a single call.
#[must_use]
#[derive(Default, Debug, Clone)]
pub struct Call {
    args: Vec<Arg>,
    kwargs: BTreeMap<String, Arg>,
}

impl Call {
    /// Create a new call with the passed positional `args`.
    pub fn new<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            kwargs: BTreeMap::new(),
        }
    }

    /// Add (or replace) the keyword argument `name`.
    pub fn with_kwarg<N, A>(mut self, name: N, arg: A) -> Self
    where
        N: Into<String>,
        A: Into<Arg>,
    {
        self.kwargs.insert(name.into(), arg.into());

        self
    }

    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    #[must_use]
    pub fn kwarg(&self, name: &str) -> Option<&Arg> {
        self.kwargs.get(name)
    }

    pub fn kwargs(&self) -> impl Iterator<Item = (&str, &Arg)> {
        self.kwargs.iter().map(|(name, arg)| (name.as_str(), arg))
    }

    /// Returns `Ok(true)` if both calls have the same shape and every
    /// argument matches its counterpart (see [`Arg::matches`]).
    ///
    /// Arguments are compared in order and the comparison stops at the first
    /// mismatch.
    ///
    /// # Errors
    /// Returns the error of the first matcher that could not compare its
    /// counterpart.
    pub fn matches(&self, other: &Call) -> Result<bool> {
        if self.args.len() != other.args.len() || self.kwargs.len() != other.kwargs.len() {
            return Ok(false);
        }

        for (a, b) in self.args.iter().zip(&other.args) {
            if !a.matches(b)? {
                return Ok(false);
            }
        }

        for (name, a) in &self.kwargs {
            let Some(b) = other.kwargs.get(name) else {
                return Ok(false);
            };

            if !a.matches(b)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        expect_comparable(self.matches(other), self, other)
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        write!(f, "call(")?;

        for arg in &self.args {
            if !take(&mut first) {
                write!(f, ", ")?;
            }

            write!(f, "{arg}")?;
        }

        for (name, arg) in &self.kwargs {
            if !take(&mut first) {
                write!(f, ", ")?;
            }

            write!(f, "{name}={arg}")?;
        }

        write!(f, ")")
    }
}
