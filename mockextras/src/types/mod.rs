//! The [`types`](self) module contains the process wide type registry that is
//! used to describe the runtime type of a [`Value`](crate::Value).
//!
//! The registry is pre-populated with the built-in hierarchy:
//!
//! ```text
//! object
//! ├── none
//! ├── bool
//! ├── number
//! │   ├── int
//! │   └── float
//! ├── sequence
//! │   ├── text
//! │   │   ├── str
//! │   │   └── bytes
//! │   ├── list
//! │   └── tuple
//! ├── set
//! └── map
//! ```
//!
//! User defined classes are added with [`Type::class`] or [`Type::register`]
//! and are used by [`Object`](crate::value::Object) values.

mod registry;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::{Error, Result};

use registry::REGISTRY;

/// Handle to an entry of the type registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Type(usize);

impl Type {
    /// The universal type, every other type is a subtype of it.
    pub const OBJECT: Self = Self(0);
    pub const NONE: Self = Self(1);
    pub const BOOL: Self = Self(2);
    pub const NUMBER: Self = Self(3);
    pub const INT: Self = Self(4);
    pub const FLOAT: Self = Self(5);
    pub const SEQUENCE: Self = Self(6);
    pub const TEXT: Self = Self(7);
    pub const STR: Self = Self(8);
    pub const BYTES: Self = Self(9);
    pub const LIST: Self = Self(10);
    pub const TUPLE: Self = Self(11);
    pub const SET: Self = Self(12);
    pub const MAP: Self = Self(13);

    /// Register a new class named `name` that derives from [`Type::OBJECT`].
    ///
    /// # Errors
    /// Returns [`Error::DuplicateType`] if a type with the same name was
    /// already registered.
    pub fn class(name: &str) -> Result<Self> {
        Self::register(name, Self::OBJECT)
    }

    /// Register a new class named `name` that derives from `parent`.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateType`] if a type with the same name was
    /// already registered.
    pub fn register(name: &str, parent: Self) -> Result<Self> {
        let ty = REGISTRY.write().insert(name, parent)?;

        tracing::debug!(name, parent = %parent, "registered type");

        Ok(ty)
    }

    /// Find a registered type by its name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        REGISTRY.read().lookup(name)
    }

    /// Like [`lookup`](Self::lookup) but returns an error for unknown names.
    ///
    /// # Errors
    /// Returns [`Error::UnknownType`] if no type named `name` exists.
    pub fn resolve(name: &str) -> Result<Self> {
        Self::lookup(name).ok_or_else(|| Error::UnknownType(name.to_owned()))
    }

    /// Name the type was registered with.
    #[must_use]
    pub fn name(self) -> String {
        REGISTRY.read().name(self).to_owned()
    }

    /// Direct parent of the type, `None` for [`Type::OBJECT`].
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        REGISTRY.read().parent(self)
    }

    /// Returns `true` if `self` is `base` or derives from it.
    #[must_use]
    pub fn is_subtype_of(self, base: Self) -> bool {
        if base == Self::OBJECT {
            return true;
        }

        REGISTRY.read().is_subtype_of(self, base)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(REGISTRY.read().name(*self))
    }
}
