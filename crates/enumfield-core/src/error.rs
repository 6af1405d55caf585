//! # Error Types
//!
//! Two families of errors live here:
//!
//! - [`EnumError`] is raised when a value or a value change is rejected.
//!   It has exactly two kinds, `InvalidChoice` and `InvalidTransition`, and
//!   is always surfaced to the caller.
//! - [`DefinitionError`] is raised once, when a definition is built or
//!   loaded from a declaration, and never afterwards.
//!
//! Soft lookups (`get`, `get_name`, `get_label`) never produce an error;
//! they return `None` instead.

use thiserror::Error;

/// Rejection of a value or of a value change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// The value is not a member of the enumeration.
    #[error("{value} is not one of the available choices for enum {enum_name}")]
    InvalidChoice {
        /// The offending raw value, as the caller supplied it.
        value: String,
        /// Name of the enumeration the value was checked against.
        enum_name: String,
    },

    /// Both endpoints are members, but the pair is not in the transition table.
    #[error("{enum_name} can not go from \"{from}\" to \"{to}\"")]
    InvalidTransition {
        /// Name of the enumeration.
        enum_name: String,
        /// Origin, rendered by name when it resolves.
        from: String,
        /// Destination, rendered by name when it resolves.
        to: String,
    },
}

impl EnumError {
    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidChoice { .. } => "INVALID_CHOICE",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}

/// A definition could not be built.
#[derive(Error, Debug)]
pub enum DefinitionError {
    /// The enumeration itself has no name.
    #[error("enum definition name must not be empty")]
    EmptyName,

    /// A member was declared with an empty name.
    #[error("enum {enum_name}: member with value {value} has an empty name")]
    EmptyMemberName {
        /// Enumeration being built.
        enum_name: String,
        /// Value of the nameless member.
        value: i64,
    },

    /// Two members share a name.
    #[error("enum {enum_name}: duplicate member name {name:?}")]
    DuplicateName {
        /// Enumeration being built.
        enum_name: String,
        /// The repeated name.
        name: String,
    },

    /// Two members share a value.
    #[error("enum {enum_name}: value {value} is used by both {first:?} and {second:?}")]
    DuplicateValue {
        /// Enumeration being built.
        enum_name: String,
        /// The repeated value.
        value: i64,
        /// Member that declared the value first.
        first: String,
        /// Member that declared it again.
        second: String,
    },

    /// A label, default or transition refers to a value outside the member set.
    #[error("enum {enum_name}: {context} refers to unknown value {value}")]
    UnknownValue {
        /// Enumeration being built.
        enum_name: String,
        /// Where the reference appeared ("label", "default", "transition origin", ...).
        context: &'static str,
        /// The unknown value.
        value: i64,
    },

    /// A declaration refers to a member name that is not declared.
    #[error("enum {enum_name}: {context} refers to unknown member {name:?}")]
    UnknownName {
        /// Enumeration being loaded.
        enum_name: String,
        /// Where the reference appeared.
        context: &'static str,
        /// The unknown name.
        name: String,
    },

    /// A YAML or JSON declaration could not be parsed.
    #[error("invalid enum declaration: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for DefinitionError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for DefinitionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
