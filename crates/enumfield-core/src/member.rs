//! # Member: Resolved Enumeration Element
//!
//! A [`Member`] is a cheap, copyable handle onto one element of an
//! [`EnumDefinition`]. It carries no identity of its own beyond the
//! `(definition, value)` pair: two lookups of the same value from the same
//! definition produce equal, interchangeable members.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::definition::EnumDefinition;

/// One named, valued element of an enumeration.
#[derive(Clone, Copy)]
pub struct Member<'d> {
    definition: &'d EnumDefinition,
    index: usize,
}

impl<'d> Member<'d> {
    pub(crate) fn new(definition: &'d EnumDefinition, index: usize) -> Self {
        Self { definition, index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// The enumeration this member belongs to.
    pub fn definition(&self) -> &'d EnumDefinition {
        self.definition
    }

    /// Member name, e.g. `"ALIVE"`.
    pub fn name(&self) -> &'d str {
        self.definition.entry(self.index).name()
    }

    /// Integer value, the stored representation.
    pub fn value(&self) -> i64 {
        self.definition.entry(self.index).value()
    }

    /// Human-readable label. Falls back to the name when none was declared.
    pub fn label(&self) -> &'d str {
        self.definition.entry(self.index).label()
    }

    /// Whether both members come from the same definition instance.
    pub fn same_definition(&self, other: &Member<'_>) -> bool {
        std::ptr::eq(self.definition, other.definition)
    }
}

impl std::fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("enum", &self.definition.name())
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

impl std::fmt::Display for Member<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl PartialEq for Member<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_definition(other) && self.index == other.index
    }
}

impl Eq for Member<'_> {}

impl PartialEq<i64> for Member<'_> {
    fn eq(&self, other: &i64) -> bool {
        self.value() == *other
    }
}

impl PartialEq<Member<'_>> for i64 {
    fn eq(&self, other: &Member<'_>) -> bool {
        *self == other.value()
    }
}

impl PartialOrd for Member<'_> {
    /// Members of one definition order by value; members of different
    /// definitions are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_definition(other) {
            Some(self.value().cmp(&other.value()))
        } else {
            None
        }
    }
}

impl PartialOrd<i64> for Member<'_> {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.value().cmp(other))
    }
}

impl Hash for Member<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.definition.name().hash(state);
        self.value().hash(state);
    }
}

impl Serialize for Member<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value())
    }
}
