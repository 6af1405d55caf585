//! # Presentation-Ordered Choices

use crate::member::Member;

/// One entry of [`EnumDefinition::choices`](crate::EnumDefinition::choices).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Choice<'d> {
    /// Empty-value sentinel placed first for optional selections.
    Blank,
    /// A real member.
    Member(Member<'d>),
}

impl<'d> Choice<'d> {
    /// Integer value, `None` for the blank entry.
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Blank => None,
            Self::Member(m) => Some(m.value()),
        }
    }

    /// The member, `None` for the blank entry.
    pub fn member(&self) -> Option<Member<'d>> {
        match self {
            Self::Blank => None,
            Self::Member(m) => Some(*m),
        }
    }

    /// Label shown to users; empty for the blank entry.
    pub fn label(&self) -> &'d str {
        match self {
            Self::Blank => "",
            Self::Member(m) => m.label(),
        }
    }

    /// Value as submitted by a form: `""` for blank, the decimal integer otherwise.
    pub fn form_value(&self) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Member(m) => m.value().to_string(),
        }
    }

    /// Whether this is the blank sentinel.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}
