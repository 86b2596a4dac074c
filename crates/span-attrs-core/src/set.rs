//! The final attribute collection.
//!
//! Name-keyed and duplicate-free: inserting a value under a name that is
//! already present replaces the value in place. Iteration order is the
//! insertion order, which is deterministic but not part of the caller
//! contract (span attribute consumers treat the set as unordered).

use crate::key::AttrName;
use crate::value::AttrValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One finished (name, value) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: AttrName,
    pub value: AttrValue,
}

impl Attribute {
    pub fn new(name: AttrName, value: AttrValue) -> Self {
        Self { name, value }
    }
}

/// Ordered, name-keyed set of finished attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    entries: IndexMap<AttrName, AttrValue>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair; an existing entry under the same name is replaced
    /// (last insert wins).
    pub fn insert(&mut self, name: AttrName, value: AttrValue) {
        self.entries.insert(name, value);
    }

    /// Look up by final name string, whichever representation it took.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k.as_str() == name).then_some(v))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttrName, &AttrValue)> {
        self.entries.iter()
    }
}

impl IntoIterator for AttributeSet {
    type Item = Attribute;
    type IntoIter = std::vec::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl FromIterator<(AttrName, AttrValue)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (AttrName, AttrValue)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}
