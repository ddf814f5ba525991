use std::collections::HashSet;
use std::fmt::{Formatter, Result as FmtResult};

use crate::error::Result;
use crate::value::{hash_set, write_set, Value};

use super::{impl_matcher_ops, traced, Matcher};

/// Create a new [`AnyOf`] matcher from a list of discrete values.
///
/// ```
/// use mockextras::any_of;
///
/// let small_primes = any_of![2, 3, 5, 7].unwrap();
/// assert!(small_primes == 5);
/// assert!(small_primes != 4);
/// ```
///
/// Expands to [`AnyOf::from_values`] and returns its result.
#[macro_export]
macro_rules! any_of {
    ($( $value:expr ),* $(,)?) => {
        $crate::matcher::AnyOf::from_values::<_, $crate::Value>([
            $( $crate::Value::from($value) ),*
        ])
    };
}

/// Implements a [`Matcher`] that accepts any value of a set of expected
/// values.
///
/// All members, and every candidate compared against the matcher, must be
/// hashable (see [`Value::is_hashable`]).
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyOf {
    members: HashSet<Value>,
}

impl AnyOf {
    /// Create a matcher for the passed discrete `values`. Duplicates collapse.
    ///
    /// # Errors
    /// Returns [`Error::Unhashable`](crate::Error::Unhashable) if one of the
    /// values is not hashable.
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let members = hash_set(values)?;

        Ok(Self { members })
    }

    /// Create a matcher from a single argument.
    ///
    /// If `value` is a list, tuple, set or map, its elements (keys for maps)
    /// become the members of the matcher. Any other value, including strings
    /// and bytes, becomes the only member.
    ///
    /// ```
    /// use mockextras::{matcher::AnyOf, Value};
    ///
    /// let digits = AnyOf::from_iterable(Value::list([1, 2, 2, 3])).unwrap();
    /// assert_eq!(digits.len(), 3);
    ///
    /// let greeting = AnyOf::from_iterable("hello").unwrap();
    /// assert!(greeting == "hello");
    /// assert!(greeting != "h");
    /// ```
    ///
    /// # Errors
    /// Returns [`Error::Unhashable`](crate::Error::Unhashable) if one of the
    /// members is not hashable.
    pub fn from_iterable<V: Into<Value>>(value: V) -> Result<Self> {
        match value.into().into_elements() {
            Ok(elements) => Self::from_values(elements),
            Err(single) => Self::from_values([single]),
        }
    }

    #[must_use]
    pub fn members(&self) -> &HashSet<Value> {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Matcher for AnyOf {
    fn matches(&self, value: &Value) -> Result<bool> {
        let result = value
            .ensure_hashable()
            .map(|()| self.members.contains(value));

        traced(self, value, result)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "AnyOf(")?;
        write_set(f, &self.members)?;
        write!(f, ")")
    }
}

impl_matcher_ops!(AnyOf);
