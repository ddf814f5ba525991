use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::Type;

use super::Value;

/// Membership protocol a value supports, see [`Value::membership`].
#[derive(Debug, Clone, Copy)]
pub enum Membership<'a> {
    /// Substring test, the needle must be a [`Value::Str`].
    Text(&'a str),

    /// Sub-slice test for [`Value::Bytes`] needles, element test for
    /// [`Value::Int`] needles in `0..=255`.
    Bytes(&'a [u8]),

    /// Element test using value equality.
    Sequence(&'a [Value]),

    /// Hashed element test, the needle must be hashable.
    Set(&'a HashSet<Value>),

    /// Key test, the needle must be hashable.
    Map(&'a [(Value, Value)]),

    /// The value does not support membership tests.
    Unsupported(Type),
}

impl Value {
    /// Returns the membership protocol supported by this value.
    #[must_use]
    pub fn membership(&self) -> Membership<'_> {
        match self {
            Self::Str(s) => Membership::Text(s),
            Self::Bytes(b) => Membership::Bytes(b),
            Self::List(items) | Self::Tuple(items) => Membership::Sequence(items),
            Self::Set(items) => Membership::Set(items),
            Self::Map(entries) => Membership::Map(entries),
            other => Membership::Unsupported(other.type_()),
        }
    }

    /// Returns `true` if `needle` is a member of this value.
    ///
    /// # Errors
    /// - [`Error::NotAContainer`] if this value does not support membership tests.
    /// - [`Error::IncompatibleNeedle`] if the needle has the wrong type for the
    ///   textual container.
    /// - [`Error::Unhashable`] if this value is a set or map and the needle is
    ///   not hashable.
    pub fn contains(&self, needle: &Value) -> Result<bool> {
        match self.membership() {
            Membership::Text(haystack) => match needle {
                Self::Str(needle) => Ok(haystack.contains(needle.as_str())),
                other => Err(incompatible("str", "str", other)),
            },
            Membership::Bytes(haystack) => match needle {
                Self::Bytes(needle) => Ok(contains_slice(haystack, needle)),
                Self::Int(byte) => match u8::try_from(*byte) {
                    Ok(byte) => Ok(haystack.contains(&byte)),
                    Err(_) => Err(incompatible("bytes", "an int in 0..=255", needle)),
                },
                other => Err(incompatible("bytes", "bytes or int", other)),
            },
            Membership::Sequence(items) => Ok(items.contains(needle)),
            Membership::Set(items) => {
                needle.ensure_hashable()?;

                Ok(items.contains(needle))
            }
            Membership::Map(entries) => {
                needle.ensure_hashable()?;

                Ok(entries.iter().any(|(key, _)| key == needle))
            }
            Membership::Unsupported(ty) => Err(Error::NotAContainer {
                type_name: ty.name(),
            }),
        }
    }
}

fn incompatible(container: &str, expected: &'static str, found: &Value) -> Error {
    Error::IncompatibleNeedle {
        container: container.to_owned(),
        expected,
        found: found.type_().name(),
    }
}

fn contains_slice(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
