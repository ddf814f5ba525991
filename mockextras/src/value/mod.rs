//! The [`value`](self) module defines [`Value`], the runtime representation of
//! any argument a matcher is compared against.

mod membership;
mod object;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::mem::{discriminant, take};

use crate::error::{Error, Result};
use crate::types::Type;

pub use membership::Membership;
pub use object::Object;

/// Dynamically typed value that is passed to a mocked call or is part of an
/// expected call signature.
///
/// Equality is structural and never crosses variants, so `Int(1)` is neither
/// equal to `Float(1.0)` nor to `Bool(true)`. This differs from dynamically
/// typed hosts where `2.0 == 2` and `True == 1` hold: a matcher built from
/// `2` does not accept `2.0`, and one built from `1` does not accept `true`.
/// Normalise numbers before comparing if that matters.
///
/// `List`, `Set` and `Map` are not hashable. They can not be stored in a
/// [`Value::Set`], used as [`Value::Map`] key or be compared against an
/// [`AnyOf`](crate::matcher::AnyOf) matcher. Use [`Value::set`] and
/// [`Value::map`] to build sets and maps, they check this for you.
#[derive(Clone, Debug)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(HashSet<Value>),
    Map(Vec<(Value, Value)>),
    Object(Object),
}

impl Value {
    /// Create a [`Value::Bytes`] from the passed `bytes`.
    pub fn bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Create a [`Value::List`] from the passed `items`.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Create a [`Value::Tuple`] from the passed `items`.
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Create a [`Value::Set`] from the passed `items`. Duplicates collapse.
    ///
    /// # Errors
    /// Returns [`Error::Unhashable`] if any of the items is not hashable.
    pub fn set<I, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        hash_set(items).map(Self::Set)
    }

    /// Create a [`Value::Map`] from the passed `entries`. A later entry
    /// replaces the value of an earlier entry with the same key.
    ///
    /// # Errors
    /// Returns [`Error::Unhashable`] if any of the keys is not hashable.
    pub fn map<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut ret: Vec<(Value, Value)> = Vec::new();

        for (key, value) in entries {
            let key = key.into();
            let value = value.into();
            key.ensure_hashable()?;

            match ret.iter_mut().find(|(k, _)| *k == key) {
                Some((_, v)) => *v = value,
                None => ret.push((key, value)),
            }
        }

        Ok(Self::Map(ret))
    }

    /// Runtime type of the value.
    #[must_use]
    pub fn type_(&self) -> Type {
        match self {
            Self::None => Type::NONE,
            Self::Bool(_) => Type::BOOL,
            Self::Int(_) => Type::INT,
            Self::Float(_) => Type::FLOAT,
            Self::Str(_) => Type::STR,
            Self::Bytes(_) => Type::BYTES,
            Self::List(_) => Type::LIST,
            Self::Tuple(_) => Type::TUPLE,
            Self::Set(_) => Type::SET,
            Self::Map(_) => Type::MAP,
            Self::Object(o) => o.class(),
        }
    }

    /// Returns `true` if the value may be used as set member or map key.
    #[must_use]
    pub fn is_hashable(&self) -> bool {
        match self {
            Self::List(_) | Self::Set(_) | Self::Map(_) => false,
            Self::Tuple(items) => items.iter().all(Self::is_hashable),
            Self::Object(o) => o.fields().all(|(_, value)| value.is_hashable()),
            _ => true,
        }
    }

    /// Returns `true` for textual values. They are iterable in principle, but
    /// are always treated as one single value.
    #[must_use]
    pub fn is_string_like(&self) -> bool {
        matches!(self, Self::Str(_) | Self::Bytes(_))
    }

    /// Split the value into its elements.
    ///
    /// Lists, tuples and sets yield their items, maps yield their keys.
    /// String-like and scalar values are not expanded and are returned as
    /// error instead.
    ///
    /// # Errors
    /// Returns the unchanged value if it is not iterable or string-like.
    pub fn into_elements(self) -> Result<Vec<Value>, Self> {
        match self {
            Self::List(items) | Self::Tuple(items) => Ok(items),
            Self::Set(items) => Ok(items.into_iter().collect()),
            Self::Map(entries) => Ok(entries.into_iter().map(|(key, _)| key).collect()),
            other => Err(other),
        }
    }

    pub(crate) fn ensure_hashable(&self) -> Result<()> {
        if self.is_hashable() {
            Ok(())
        } else {
            Err(Error::Unhashable {
                type_name: self.type_().name(),
            })
        }
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => {
                // `Map` entries may be built by hand, so duplicates are possible
                let covers = |x: &[(Value, Value)], y: &[(Value, Value)]| {
                    x.iter()
                        .all(|(key, value)| y.iter().any(|(k, v)| k == key && v == value))
                };

                a.len() == b.len() && covers(a, b) && covers(b, a)
            }
            (Self::Object(a), Self::Object(b)) => a == b,
            (_, _) => false,
        }
    }
}

/// `NaN` is never equal to itself, so a `NaN` member of a set can not be
/// found again. Apart from that the relation is reflexive.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);

        match self {
            Self::None => (),
            Self::Bool(x) => x.hash(state),
            Self::Int(x) => x.hash(state),
            Self::Float(x) => {
                // -0.0 == 0.0
                let x = if *x == 0.0 { 0.0 } else { *x };

                x.to_bits().hash(state);
            }
            Self::Str(x) => x.hash(state),
            Self::Bytes(x) => x.hash(state),
            Self::List(items) | Self::Tuple(items) => items.hash(state),
            Self::Set(items) => items.len().hash(state),
            Self::Map(entries) => entries.len().hash(state),
            Self::Object(o) => o.hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(x) => write!(f, "{x}"),
            Self::Float(x) if x.is_nan() => f.write_str("nan"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_negative() { "-inf" } else { "inf" })
            }
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(x) => write!(f, "{x:?}"),
            Self::Bytes(x) => write!(f, "b\"{}\"", x.escape_ascii()),
            Self::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Self::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Set(items) => write_set(f, items),
            Self::Map(entries) => {
                let mut first = true;

                f.write_str("{")?;
                for (key, value) in entries {
                    if !take(&mut first) {
                        f.write_str(", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Object(o) => Display::fmt(o, f),
        }
    }
}

/// Collect `items` into a set of values, rejecting unhashable ones.
pub(crate) fn hash_set<I, V>(items: I) -> Result<HashSet<Value>>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    items
        .into_iter()
        .map(|item| {
            let item = item.into();
            item.ensure_hashable()?;

            Ok(item)
        })
        .collect()
}

/// Writes the members of a set in a stable order, `set()` if there are none.
pub(crate) fn write_set<'a, I>(f: &mut Formatter<'_>, items: I) -> FmtResult
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut items = items.into_iter().collect::<Vec<_>>();
    if items.is_empty() {
        return f.write_str("set()");
    }

    items.sort_by(|a, b| display_order(a, b));

    f.write_str("{")?;
    write_items(f, items)?;
    f.write_str("}")
}

pub(crate) fn write_items<'a, I>(f: &mut Formatter<'_>, items: I) -> FmtResult
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut first = true;

    for item in items {
        if !take(&mut first) {
            f.write_str(", ")?;
        }

        Display::fmt(item, f)?;
    }

    Ok(())
}

/// Stable order used to print the members of a set.
fn display_order(a: &Value, b: &Value) -> Ordering {
    fn rank(value: &Value) -> u8 {
        match value {
            Value::None => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Float(_) => 3,
            Value::Str(_) => 4,
            Value::Bytes(_) => 5,
            Value::List(_) => 6,
            Value::Tuple(_) => 7,
            Value::Set(_) => 8,
            Value::Map(_) => 9,
            Value::Object(_) => 10,
        }
    }

    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
        (a, b) => rank(a)
            .cmp(&rank(b))
            .then_with(|| a.to_string().cmp(&b.to_string())),
    }
}

macro_rules! impl_from {
    ($variant:ident($target:ty): $( $type:ty ),+) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from!(Bool(bool): bool);
impl_from!(Int(i64): i8, i16, i32, i64, u8, u16, u32);
impl_from!(Float(f64): f32, f64);
impl_from!(Str(String): &str, String);
impl_from!(Object(Object): Object);

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Self {
        Self::list(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}
