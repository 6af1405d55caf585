//! # Enum Registry
//!
//! [`EnumDefinition`] is the closed vocabulary: an ordered set of uniquely
//! named, uniquely valued members, optional labels, an optional default and
//! an optional transition table. It is built once through
//! [`EnumDefinitionBuilder`], validated at that point, and never mutated
//! afterwards. Place it in a `static` (`OnceLock`) or otherwise share it by
//! reference; members borrow from it.
//!
//! ```text
//! EnumDefinition::builder("LampState")
//!     .member("OFF", 0)
//!     .member("ON", 1)
//!     .default_value(0)
//!     .build()?
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::choice::Choice;
use crate::error::DefinitionError;
use crate::key::EnumKey;
use crate::member::Member;

// ─── Member storage ──────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct MemberEntry {
    name: String,
    value: i64,
    label: Option<String>,
}

impl MemberEntry {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn value(&self) -> i64 {
        self.value
    }

    pub(crate) fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub(crate) fn declared_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

// ─── Definition ──────────────────────────────────────────────────────

/// An immutable, closed enumeration of named integer values.
///
/// Members are stored ascending by value, independent of declaration order.
#[derive(Debug)]
pub struct EnumDefinition {
    name: String,
    entries: Vec<MemberEntry>,
    by_name: HashMap<String, usize>,
    by_value: BTreeMap<i64, usize>,
    default: Option<usize>,
    pub(crate) transitions: BTreeMap<i64, BTreeSet<i64>>,
}

impl EnumDefinition {
    /// Start declaring a new enumeration.
    pub fn builder(name: impl Into<String>) -> EnumDefinitionBuilder {
        EnumDefinitionBuilder::new(name)
    }

    pub(crate) fn entry(&self, index: usize) -> &MemberEntry {
        &self.entries[index]
    }

    /// Name of the enumeration, used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the enumeration declares no members at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All members, ascending by value.
    pub fn members(&self) -> impl Iterator<Item = Member<'_>> + '_ {
        (0..self.entries.len()).map(move |i| Member::new(self, i))
    }

    /// Value → member mapping, ascending by value.
    pub fn values(&self) -> BTreeMap<i64, Member<'_>> {
        self.members().map(|m| (m.value(), m)).collect()
    }

    /// Whether `value` belongs to the member set.
    pub fn contains_value(&self, value: i64) -> bool {
        self.by_value.contains_key(&value)
    }

    /// `(value, member)` pairs ascending by value, with a blank sentinel
    /// first when `include_blank` is set.
    pub fn choices(&self, include_blank: bool) -> Vec<Choice<'_>> {
        let mut choices = Vec::with_capacity(self.len() + usize::from(include_blank));
        if include_blank {
            choices.push(Choice::Blank);
        }
        choices.extend(self.members().map(Choice::Member));
        choices
    }

    /// `(name, value)` pairs ascending by value.
    pub fn items(&self) -> Vec<(&str, i64)> {
        self.entries.iter().map(|e| (e.name(), e.value())).collect()
    }

    /// The declared default member, if any.
    ///
    /// There is no first-member fallback: an enumeration without a declared
    /// default returns `None`, which is distinct from a default of value 0.
    pub fn default(&self) -> Option<Member<'_>> {
        self.default.map(|i| Member::new(self, i))
    }

    /// Soft lookup by value, name or member.
    ///
    /// Returns `None` when the key does not resolve. A member key resolves
    /// only when it belongs to this definition instance.
    pub fn get<'a>(&self, key: impl Into<EnumKey<'a>>) -> Option<Member<'_>> {
        let index = match key.into() {
            EnumKey::Value(v) => self.by_value.get(&v).copied(),
            EnumKey::Name(n) => self.by_name.get(n).copied(),
            EnumKey::Member(m) => {
                if std::ptr::eq(m.definition(), self) {
                    Some(m.index())
                } else {
                    None
                }
            }
        };
        index.map(|i| Member::new(self, i))
    }

    /// Name of the resolved member, `None` when the key does not resolve.
    pub fn get_name<'a>(&self, key: impl Into<EnumKey<'a>>) -> Option<&str> {
        self.get(key).map(|m| m.name())
    }

    /// Label of the resolved member, `None` when the key does not resolve.
    pub fn get_label<'a>(&self, key: impl Into<EnumKey<'a>>) -> Option<&str> {
        self.get(key).map(|m| m.label())
    }
}

// ─── Builder ─────────────────────────────────────────────────────────

/// Explicit, static declaration of an enumeration.
///
/// Nothing is checked until [`build`](Self::build), which validates the
/// whole declaration once.
#[derive(Debug, Clone, Default)]
pub struct EnumDefinitionBuilder {
    name: String,
    members: Vec<(String, i64)>,
    labels: Vec<(i64, String)>,
    default: Option<i64>,
    transitions: Vec<(i64, Vec<i64>)>,
}

impl EnumDefinitionBuilder {
    /// Empty declaration named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declare a member.
    pub fn member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.members.push((name.into(), value));
        self
    }

    /// Attach a label to the member with `value`. A later label for the same
    /// value replaces an earlier one.
    pub fn label(mut self, value: i64, label: impl Into<String>) -> Self {
        self.labels.push((value, label.into()));
        self
    }

    /// Designate the member with `value` as the initial value for new holders.
    pub fn default_value(mut self, value: i64) -> Self {
        self.default = Some(value);
        self
    }

    /// Allow `destination` to be reached from each of `origins`.
    ///
    /// Repeated calls for one destination accumulate origins.
    pub fn transition(mut self, destination: i64, origins: impl IntoIterator<Item = i64>) -> Self {
        self.transitions
            .push((destination, origins.into_iter().collect()));
        self
    }

    /// Validate the declaration and freeze it.
    pub fn build(self) -> Result<EnumDefinition, DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        let enum_name = self.name;

        let mut declared: BTreeMap<i64, MemberEntry> = BTreeMap::new();
        let mut seen_names: HashSet<String> = HashSet::new();
        for (name, value) in self.members {
            if name.is_empty() {
                return Err(DefinitionError::EmptyMemberName { enum_name, value });
            }
            if seen_names.contains(&name) {
                return Err(DefinitionError::DuplicateName { enum_name, name });
            }
            if let Some(first) = declared.get(&value) {
                return Err(DefinitionError::DuplicateValue {
                    first: first.name.clone(),
                    enum_name,
                    value,
                    second: name,
                });
            }
            seen_names.insert(name.clone());
            declared.insert(
                value,
                MemberEntry {
                    name,
                    value,
                    label: None,
                },
            );
        }

        for (value, label) in self.labels {
            match declared.get_mut(&value) {
                Some(entry) => entry.label = Some(label),
                None => {
                    return Err(DefinitionError::UnknownValue {
                        enum_name,
                        context: "label",
                        value,
                    })
                }
            }
        }

        if let Some(value) = self.default {
            if !declared.contains_key(&value) {
                return Err(DefinitionError::UnknownValue {
                    enum_name,
                    context: "default",
                    value,
                });
            }
        }

        let mut transitions: BTreeMap<i64, BTreeSet<i64>> = BTreeMap::new();
        for (destination, origins) in self.transitions {
            if !declared.contains_key(&destination) {
                return Err(DefinitionError::UnknownValue {
                    enum_name,
                    context: "transition destination",
                    value: destination,
                });
            }
            if let Some(&origin) = origins.iter().find(|o| !declared.contains_key(*o)) {
                return Err(DefinitionError::UnknownValue {
                    enum_name,
                    context: "transition origin",
                    value: origin,
                });
            }
            transitions.entry(destination).or_default().extend(origins);
        }

        let entries: Vec<MemberEntry> = declared.into_values().collect();
        let by_value: BTreeMap<i64, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.value, i))
            .collect();
        let by_name: HashMap<String, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        let default = self.default.and_then(|v| by_value.get(&v).copied());

        tracing::debug!(
            enum_name = %enum_name,
            members = entries.len(),
            transitions = transitions.len(),
            has_default = default.is_some(),
            "enum definition built"
        );

        Ok(EnumDefinition {
            name: enum_name,
            entries,
            by_name,
            by_value,
            default,
            transitions,
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
