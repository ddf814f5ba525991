use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::error::Result;
use crate::matcher::{expect_comparable, Any, AnyOf, Contains, Matcher};
use crate::value::{Object, Value};

/// One argument slot of a [`Call`](super::Call): a plain value or a matcher.
#[derive(Debug, Clone)]
pub enum Arg {
    Value(Value),
    Matcher(Arc<dyn Matcher>),
}

impl Arg {
    /// Wrap any custom `matcher` into an argument.
    pub fn matcher<M>(matcher: M) -> Self
    where
        M: Matcher + 'static,
    {
        Self::Matcher(Arc::new(matcher))
    }

    /// Compare two arguments.
    ///
    /// Two values are compared by value, a matcher and a value by running the
    /// matcher with the value as candidate (regardless of the side the matcher
    /// is on). Two matchers are equal only if their display representations
    /// are equal. Matchers are not evaluated against each other, so `Any()` is
    /// not equal to `Contains(1)` or any other matcher but itself.
    ///
    /// # Errors
    /// Returns the error of the matcher if the value can not be compared.
    pub fn matches(&self, other: &Arg) -> Result<bool> {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => Ok(a == b),
            (Self::Matcher(m), Self::Value(v)) | (Self::Value(v), Self::Matcher(m)) => {
                m.matches(v)
            }
            (Self::Matcher(a), Self::Matcher(b)) => Ok(a.to_string() == b.to_string()),
        }
    }

    /// Compare the argument against a plain `value`.
    ///
    /// # Errors
    /// Returns the error of the matcher if the value can not be compared.
    pub fn matches_value(&self, value: &Value) -> Result<bool> {
        match self {
            Self::Value(v) => Ok(v == value),
            Self::Matcher(m) => m.matches(value),
        }
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Value(v) => Display::fmt(v, f),
            Self::Matcher(m) => Display::fmt(&**m, f),
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        expect_comparable(self.matches(other), self, other)
    }
}

impl PartialEq<Value> for Arg {
    fn eq(&self, other: &Value) -> bool {
        expect_comparable(self.matches_value(other), self, other)
    }
}

impl PartialEq<Arg> for Value {
    fn eq(&self, other: &Arg) -> bool {
        other == self
    }
}

macro_rules! impl_from_value {
    ($( $type:ty ),+) => {
        $(
            impl From<$type> for Arg {
                fn from(value: $type) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )+
    };
}

macro_rules! impl_from_matcher {
    ($( $type:ty ),+) => {
        $(
            impl From<$type> for Arg {
                fn from(matcher: $type) -> Self {
                    Self::matcher(matcher)
                }
            }
        )+
    };
}

impl_from_value!(Value, Object, bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, &str, String);
impl_from_matcher!(Any, AnyOf, Contains);

impl<T> From<Vec<T>> for Arg
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Self {
        Self::Value(Value::list(value))
    }
}

impl<M> From<Arc<M>> for Arg
where
    M: Matcher + 'static,
{
    fn from(matcher: Arc<M>) -> Self {
        Self::Matcher(matcher)
    }
}
