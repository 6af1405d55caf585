//! # Enum Field: Persistence Adapter
//!
//! [`EnumField`] describes one enum-typed column of a record: which
//! definition it draws from, whether it may be empty, and what a new
//! record starts with. It converts between members and stored integers
//! and runs the core validation before a holder accepts a new value.

use enumfield_core::{validate_transition, Choice, EnumDefinition, EnumError, EnumKey, Member};
use thiserror::Error;

use crate::form::EnumChoiceField;
use crate::holder::EnumHolder;

/// Errors raised when a field rejects a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Membership or transition check failed.
    #[error(transparent)]
    Enum(#[from] EnumError),

    /// The field is not nullable and the value is absent.
    #[error("{enum_name} field does not allow an empty value")]
    NullNotAllowed {
        /// Enumeration backing the field.
        enum_name: String,
    },
}

/// Initial value for new holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldDefault {
    /// Use the definition's declared default, which may be absent.
    #[default]
    Inherit,
    /// Start empty even if the definition declares a default.
    None,
    /// Start with this value.
    Value(i64),
}

/// Column description for an enum-typed slot.
#[derive(Debug, Clone, Copy)]
pub struct EnumField<'d> {
    definition: &'d EnumDefinition,
    null: bool,
    blank: bool,
    default: FieldDefault,
}

impl<'d> EnumField<'d> {
    /// Non-nullable, non-blank field inheriting the definition's default.
    pub fn new(definition: &'d EnumDefinition) -> Self {
        Self {
            definition,
            null: false,
            blank: false,
            default: FieldDefault::Inherit,
        }
    }

    /// Allow the stored value to be absent.
    pub fn nullable(mut self, null: bool) -> Self {
        self.null = null;
        self
    }

    /// Allow forms to submit an empty selection.
    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    /// Override the initial value.
    pub fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    /// Enum this column stores.
    pub fn definition(&self) -> &'d EnumDefinition {
        self.definition
    }

    /// Whether the column may hold no value.
    pub fn is_nullable(&self) -> bool {
        self.null
    }

    /// Whether forms may submit an empty value.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// The initial value as configured, before any membership check.
    pub fn initial_value(&self) -> Option<i64> {
        match self.default {
            FieldDefault::Inherit => self.definition.default().map(|m| m.value()),
            FieldDefault::None => None,
            FieldDefault::Value(v) => Some(v),
        }
    }

    /// Selection choices; blank first when the field allows blank input.
    pub fn choices(&self) -> Vec<Choice<'d>> {
        self.definition.choices(self.blank)
    }

    /// Stored representation of a member.
    pub fn to_column(&self, member: Option<Member<'_>>) -> Option<i64> {
        member.map(|m| m.value())
    }

    /// Read a stored integer back. Values outside the member set are read as
    /// empty and logged.
    pub fn from_column(&self, raw: Option<i64>) -> Option<Member<'d>> {
        let raw = raw?;
        let member = self.definition.get(raw);
        if member.is_none() {
            tracing::warn!(
                enum_name = self.definition.name(),
                value = raw,
                "stored value is not a member of the enum; reading as empty"
            );
        }
        member
    }

    /// Authorize replacing `current` with `proposed`.
    pub fn validate<'a>(
        &self,
        current: Option<i64>,
        proposed: Option<impl Into<EnumKey<'a>>>,
    ) -> Result<(), FieldError> {
        let proposed: Option<EnumKey<'a>> = proposed.map(Into::into);
        if proposed.is_none() && !self.null {
            return Err(FieldError::NullNotAllowed {
                enum_name: self.definition.name().to_string(),
            });
        }
        validate_transition(self.definition, current, proposed)?;
        Ok(())
    }

    /// New holder seeded with the configured initial value.
    ///
    /// The initial value is checked for membership only; a first assignment
    /// is its own origin.
    pub fn holder(&self) -> Result<EnumHolder<'d>, FieldError> {
        let initial = self.initial_value();
        if let Some(value) = initial {
            validate_transition(self.definition, Some(value), Some(value))?;
        }
        Ok(EnumHolder::bootstrap(*self, initial))
    }

    /// New holder seeded with an explicit value instead of the default.
    pub fn holder_with<'a>(&self, key: impl Into<EnumKey<'a>>) -> Result<EnumHolder<'d>, FieldError> {
        let key: EnumKey<'a> = key.into();
        validate_transition(self.definition, Some(key), Some(key))?;
        let value = self
            .definition
            .get(key)
            .map(|m| m.value())
            .ok_or_else(|| EnumError::InvalidChoice {
                value: key.to_string(),
                enum_name: self.definition.name().to_string(),
            })?;
        Ok(EnumHolder::bootstrap(*self, Some(value)))
    }

    /// Form field for editing this column. Blank fields are optional.
    pub fn form_field(&self) -> EnumChoiceField<'d> {
        EnumChoiceField::new(self.definition).required(!self.blank)
    }
}
