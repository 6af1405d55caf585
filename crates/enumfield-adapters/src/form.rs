//! # Form Choice Field
//!
//! Populates a bounded selection list from a definition and coerces the
//! submitted string back to a member. Coercion is integer-only: names are
//! not accepted, and anything that does not resolve is rejected.

use enumfield_core::{Choice, EnumDefinition, EnumKey, Member};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while cleaning submitted form data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Empty submission for a required field.
    #[error("this field is required")]
    Required,

    /// Submission is not an integer, or not a member.
    #[error("select a valid choice; {input} is not one of the available choices")]
    InvalidChoice {
        /// Raw submitted text.
        input: String,
    },
}

/// One `<option>` of a selection widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Submitted value: `""` for blank, the decimal integer otherwise.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
    /// Whether this option is the current selection.
    pub selected: bool,
}

/// Selection field over an enum.
#[derive(Debug, Clone, Copy)]
pub struct EnumChoiceField<'d> {
    definition: &'d EnumDefinition,
    required: bool,
}

impl<'d> EnumChoiceField<'d> {
    /// Required field over `definition`.
    pub fn new(definition: &'d EnumDefinition) -> Self {
        Self {
            definition,
            required: true,
        }
    }

    /// Whether an empty submission is rejected.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Whether an empty submission is rejected.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Choices, with the blank sentinel first when the field is optional.
    pub fn choices(&self) -> Vec<Choice<'d>> {
        self.definition.choices(!self.required)
    }

    /// Render an initial value as the widget expects it.
    pub fn prepare_value<'a>(&self, value: Option<impl Into<EnumKey<'a>>>) -> String {
        let value: Option<EnumKey<'a>> = value.map(Into::into);
        match value {
            None => String::new(),
            Some(EnumKey::Value(v)) => v.to_string(),
            Some(EnumKey::Member(m)) => m.value().to_string(),
            Some(EnumKey::Name(n)) => self
                .definition
                .get(n)
                .map(|m| m.value().to_string())
                .unwrap_or_else(|| n.to_string()),
        }
    }

    /// Coerce submitted text to a member.
    ///
    /// Empty input yields `Ok(None)` on optional fields.
    pub fn clean(&self, input: &str) -> Result<Option<Member<'d>>, FormError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(FormError::Required)
            } else {
                Ok(None)
            };
        }
        let invalid = || FormError::InvalidChoice {
            input: trimmed.to_string(),
        };
        let value: i64 = trimmed.parse().map_err(|_| invalid())?;
        self.definition.get(value).map(Some).ok_or_else(invalid)
    }

    /// Options for a selection widget with `selected` marked.
    pub fn options<'a>(&self, selected: Option<impl Into<EnumKey<'a>>>) -> Vec<SelectOption> {
        let selected = self.prepare_value(selected);
        self.choices()
            .into_iter()
            .map(|choice| {
                let value = choice.form_value();
                SelectOption {
                    selected: value == selected,
                    label: choice.label().to_string(),
                    value,
                }
            })
            .collect()
    }
}
