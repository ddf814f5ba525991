use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;

use crate::types::Type;

use super::Value;

/// Instance of a class registered in the [`types`](crate::types) registry.
///
/// Two objects are equal if they share the class and all fields are equal.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Object {
    class: Type,
    fields: BTreeMap<String, Value>,
}

impl Object {
    /// Create a new object of the passed `class` without any fields.
    pub fn new(class: Type) -> Self {
        Self {
            class,
            fields: BTreeMap::new(),
        }
    }

    /// Set the field `name` to `value`.
    pub fn with_field<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(name.into(), value.into());

        self
    }

    #[must_use]
    pub fn class(&self) -> Type {
        self.class
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        write!(f, "{}(", self.class)?;
        for (name, value) in &self.fields {
            if !take(&mut first) {
                f.write_str(", ")?;
            }

            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}
