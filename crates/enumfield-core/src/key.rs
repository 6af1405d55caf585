//! # Lookup Keys
//!
//! Every lookup states explicitly what it is passing: a bare integer
//! value, a member name, or an already-resolved member. `From`
//! conversions keep call sites short (`def.get(2)`, `def.get("DEAD")`).

use crate::member::Member;

/// Input to a lookup or a transition check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnumKey<'a> {
    /// Look up by integer value.
    Value(i64),
    /// Look up by member name (exact, case-sensitive).
    Name(&'a str),
    /// An already-resolved member.
    Member(Member<'a>),
}

impl<'a> EnumKey<'a> {
    /// Key for an integer value.
    pub fn by_value(value: i64) -> Self {
        Self::Value(value)
    }

    /// Key for a member name.
    pub fn by_name(name: &'a str) -> Self {
        Self::Name(name)
    }

    /// Key for a resolved member.
    pub fn by_member(member: Member<'a>) -> Self {
        Self::Member(member)
    }
}

impl std::fmt::Display for EnumKey<'_> {
    /// Raw rendering used in error messages.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Name(n) => write!(f, "{n:?}"),
            Self::Member(m) => f.write_str(m.name()),
        }
    }
}

impl From<i64> for EnumKey<'_> {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl From<i32> for EnumKey<'_> {
    fn from(value: i32) -> Self {
        Self::Value(i64::from(value))
    }
}

impl<'a> From<&'a str> for EnumKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for EnumKey<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl<'a> From<Member<'a>> for EnumKey<'a> {
    fn from(member: Member<'a>) -> Self {
        Self::Member(member)
    }
}
