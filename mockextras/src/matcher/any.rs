use std::fmt::{Formatter, Result as FmtResult};

use crate::error::Result;
use crate::types::Type;
use crate::value::Value;

use super::{impl_matcher_ops, traced, Matcher};

/// Create a new [`Any`] matcher that matches every value.
pub fn any() -> Any {
    Any::new()
}

/// Create a new [`Any`] matcher that only matches values of the passed type
/// `ty` or one of its subtypes.
pub fn instance_of(ty: Type) -> Any {
    Any::of(ty)
}

/// Implements a [`Matcher`] that accepts any value whose runtime type is
/// the expected type or derives from it.
///
/// ```
/// use mockextras::{matcher::Any, Type, Value};
///
/// let whatever = Any::new();
/// assert!(whatever == "hello");
/// assert!(whatever == 100);
/// assert!(whatever == Value::list([1, 2, 3]));
///
/// let any_text = Any::of(Type::TEXT);
/// assert!(any_text == "hello");
/// assert!(any_text == Value::bytes(*b"monkey"));
/// assert!(any_text != Value::list(["hello", "world"]));
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Any {
    expected: Type,
}

impl Any {
    /// Matches every value.
    pub fn new() -> Self {
        Self::of(Type::OBJECT)
    }

    /// Matches values of type `expected` or of one of its subtypes.
    pub fn of(expected: Type) -> Self {
        Self { expected }
    }

    /// Like [`of`](Self::of), but looks the type up by name in the type registry.
    ///
    /// # Errors
    /// Returns [`Error::UnknownType`](crate::Error::UnknownType) if no type
    /// with this name is registered.
    pub fn named(name: &str) -> Result<Self> {
        Type::resolve(name).map(Self::of)
    }

    #[must_use]
    pub fn expected(&self) -> Type {
        self.expected
    }
}

impl Default for Any {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for Any {
    fn matches(&self, value: &Value) -> Result<bool> {
        let matched = value.type_().is_subtype_of(self.expected);

        traced(self, value, Ok(matched))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.expected == Type::OBJECT {
            write!(f, "Any()")
        } else {
            write!(f, "Any({})", self.expected)
        }
    }
}

impl_matcher_ops!(Any);
