//! Names referenced by the input but declared nowhere in it.

use std::collections::BTreeSet;

use indexmap::IndexSet;

/// Run-wide set of unresolved names.
///
/// Sorted so the placeholder module is stable between runs. Only grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnknownTypes {
    names: BTreeSet<String>,
}

impl UnknownTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`. Returns `true` the first time it is seen in the run.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Unresolved names touched while translating one file, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileUnknowns {
    names: IndexSet<String>,
}

impl FileUnknowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`. Returns `true` the first time it is seen in this file.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
