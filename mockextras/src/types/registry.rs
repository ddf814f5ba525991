use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::{Error, Result};

use super::Type;

pub(super) static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::new()));

/// Built-in types in the order of their ids. The constants on [`Type`]
/// index into this table.
const BUILTINS: &[(&str, Option<Type>)] = &[
    ("object", None),
    ("none", Some(Type::OBJECT)),
    ("bool", Some(Type::OBJECT)),
    ("number", Some(Type::OBJECT)),
    ("int", Some(Type::NUMBER)),
    ("float", Some(Type::NUMBER)),
    ("sequence", Some(Type::OBJECT)),
    ("text", Some(Type::SEQUENCE)),
    ("str", Some(Type::TEXT)),
    ("bytes", Some(Type::TEXT)),
    ("list", Some(Type::SEQUENCE)),
    ("tuple", Some(Type::SEQUENCE)),
    ("set", Some(Type::OBJECT)),
    ("map", Some(Type::OBJECT)),
];

#[derive(Debug)]
struct Entry {
    name: String,
    parent: Option<Type>,
}

#[derive(Debug)]
pub(super) struct Registry {
    entries: Vec<Entry>,
    names: HashMap<String, Type>,
}

impl Registry {
    fn new() -> Self {
        let mut entries = Vec::with_capacity(BUILTINS.len());
        let mut names = HashMap::with_capacity(BUILTINS.len());

        for (id, (name, parent)) in BUILTINS.iter().enumerate() {
            entries.push(Entry {
                name: (*name).to_owned(),
                parent: *parent,
            });
            names.insert((*name).to_owned(), Type(id));
        }

        Self { entries, names }
    }

    pub(super) fn insert(&mut self, name: &str, parent: Type) -> Result<Type> {
        if self.names.contains_key(name) {
            return Err(Error::DuplicateType(name.to_owned()));
        }

        let ty = Type(self.entries.len());
        self.entries.push(Entry {
            name: name.to_owned(),
            parent: Some(parent),
        });
        self.names.insert(name.to_owned(), ty);

        Ok(ty)
    }

    pub(super) fn lookup(&self, name: &str) -> Option<Type> {
        self.names.get(name).copied()
    }

    pub(super) fn name(&self, ty: Type) -> &str {
        &self.entries[ty.0].name
    }

    pub(super) fn parent(&self, ty: Type) -> Option<Type> {
        self.entries[ty.0].parent
    }

    pub(super) fn is_subtype_of(&self, mut ty: Type, base: Type) -> bool {
        loop {
            if ty == base {
                return true;
            }

            match self.parent(ty) {
                Some(parent) => ty = parent,
                None => return false,
            }
        }
    }
}
