//! # Serializer Field
//!
//! Maps members to JSON for REST-style payloads, either as the integer
//! value or as the member name, and maps incoming JSON back to a value.
//! Incoming data may be an integer, a string of digits, or a member name.

use enumfield_core::{EnumDefinition, EnumKey, Member};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// How members are represented on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceRepr {
    /// Integer value.
    #[default]
    Value,
    /// Member name.
    Name,
}

/// Outcome of a rejected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializerError {
    /// Optional field with unresolvable input; leave it out.
    #[error("optional field skipped")]
    Skip,

    /// Required field with unresolvable input.
    #[error("\"{input}\" is not a valid choice.")]
    InvalidChoice {
        /// The input as received.
        input: String,
    },
}

/// Serializer for one enum-typed attribute.
#[derive(Debug, Clone, Copy)]
pub struct EnumSerializerField<'d> {
    definition: &'d EnumDefinition,
    repr: ChoiceRepr,
    required: bool,
}

impl<'d> EnumSerializerField<'d> {
    /// Required field represented by integer value.
    pub fn new(definition: &'d EnumDefinition) -> Self {
        Self {
            definition,
            repr: ChoiceRepr::Value,
            required: true,
        }
    }

    /// Required field represented by member name.
    pub fn named(definition: &'d EnumDefinition) -> Self {
        Self::new(definition).with_repr(ChoiceRepr::Name)
    }

    /// Choose whether members travel as integers or names.
    pub fn with_repr(mut self, repr: ChoiceRepr) -> Self {
        self.repr = repr;
        self
    }

    /// Whether unresolvable input is rejected instead of skipped.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Wire representation in use.
    pub fn repr(&self) -> ChoiceRepr {
        self.repr
    }

    /// Wire value for one member.
    pub fn choice_value(&self, member: Member<'_>) -> Value {
        match self.repr {
            ChoiceRepr::Value => Value::from(member.value()),
            ChoiceRepr::Name => Value::from(member.name()),
        }
    }

    /// `(wire value, label)` pairs ascending by value.
    pub fn choices(&self) -> Vec<(Value, String)> {
        self.definition
            .members()
            .map(|m| (self.choice_value(m), m.label().to_string()))
            .collect()
    }

    /// Outgoing representation; `None` when the key does not resolve.
    pub fn to_representation<'a>(&self, key: impl Into<EnumKey<'a>>) -> Option<Value> {
        self.definition.get(key).map(|m| self.choice_value(m))
    }

    /// Incoming value to stored integer.
    pub fn to_internal_value(&self, data: &Value) -> Result<i64, SerializerError> {
        let member = match data {
            Value::Number(n) => n.as_i64().and_then(|v| self.definition.get(v)),
            Value::String(s) if is_digits(s) => {
                s.parse::<i64>().ok().and_then(|v| self.definition.get(v))
            }
            Value::String(s) => self.definition.get(s.as_str()),
            _ => None,
        };
        match member {
            Some(m) => Ok(m.value()),
            None if !self.required => Err(SerializerError::Skip),
            None => Err(SerializerError::InvalidChoice {
                input: match data {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            }),
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
