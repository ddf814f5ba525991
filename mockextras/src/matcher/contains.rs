use std::fmt::{Formatter, Result as FmtResult};

use crate::error::Result;
use crate::value::Value;

use super::{impl_matcher_ops, traced, Matcher};

/// Create a new [`Contains`] matcher for the passed `needle`.
pub fn contains<V: Into<Value>>(needle: V) -> Contains {
    Contains::new(needle)
}

/// Implements a [`Matcher`] that accepts values which contain the `needle`
/// as element, key or substring.
///
/// The candidate must support membership tests (see
/// [`Value::membership`]). Comparing against anything else is a failure of
/// the test itself and is reported as error, not as a mismatch:
///
/// ```should_panic
/// use mockextras::matcher::contains;
///
/// let _ = contains(1) == 5;
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contains {
    needle: Value,
}

impl Contains {
    pub fn new<V: Into<Value>>(needle: V) -> Self {
        Self {
            needle: needle.into(),
        }
    }

    #[must_use]
    pub fn needle(&self) -> &Value {
        &self.needle
    }
}

impl Matcher for Contains {
    fn matches(&self, value: &Value) -> Result<bool> {
        traced(self, value, value.contains(&self.needle))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Contains({})", self.needle)
    }
}

impl_matcher_ops!(Contains);
