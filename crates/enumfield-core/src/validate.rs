//! # Validation Entry Point
//!
//! Composition of membership and transition checks that holders call
//! before accepting a new value. Failures are always surfaced as
//! [`EnumError`]; nothing here swallows a rejection.

use crate::definition::EnumDefinition;
use crate::error::EnumError;
use crate::key::EnumKey;

/// Confirm that `to` belongs to `definition`. An absent value always passes.
///
/// Only integers and resolved members are values; a member name is rejected
/// even when it would resolve through [`EnumDefinition::get`].
pub fn validate_available_choice<'a>(
    definition: &EnumDefinition,
    to: Option<impl Into<EnumKey<'a>>>,
) -> Result<(), EnumError> {
    let Some(to) = to else {
        return Ok(());
    };
    let to: EnumKey<'a> = to.into();
    let resolved = match to {
        EnumKey::Name(_) => None,
        key => definition.get(key),
    };
    if resolved.is_some() {
        return Ok(());
    }
    Err(EnumError::InvalidChoice {
        value: to.to_string(),
        enum_name: definition.name().to_string(),
    })
}

/// Confirm that `to` is a member and that `from → to` is allowed.
///
/// An absent `to` always passes. An absent `from` is an ordinary origin:
/// it is accepted in unconstrained mode and rejected by any transition
/// table, since no table lists it. Holders bootstrap a first assignment by
/// passing the new value as `from`.
pub fn validate_transition<'a, 'b>(
    definition: &EnumDefinition,
    from: Option<impl Into<EnumKey<'a>>>,
    to: Option<impl Into<EnumKey<'b>>>,
) -> Result<(), EnumError> {
    let to: EnumKey<'b> = match to {
        Some(to) => to.into(),
        None => return Ok(()),
    };
    validate_available_choice(definition, Some(to))?;
    if !definition.has_transitions() {
        return Ok(());
    }

    let from: Option<EnumKey<'a>> = from.map(Into::into);
    let allowed = match from {
        Some(from) => definition.is_valid_transition(from, to),
        None => false,
    };
    if allowed {
        return Ok(());
    }

    tracing::debug!(
        enum_name = definition.name(),
        from = %render(definition, from),
        to = %render(definition, Some(to)),
        "transition rejected"
    );
    Err(EnumError::InvalidTransition {
        enum_name: definition.name().to_string(),
        from: render(definition, from),
        to: render(definition, Some(to)),
    })
}

/// Endpoint rendering for errors: the member name when it resolves, the raw key otherwise.
fn render(definition: &EnumDefinition, key: Option<EnumKey<'_>>) -> String {
    match key {
        None => "None".to_string(),
        Some(key) => match definition.get(key) {
            Some(member) => member.name().to_string(),
            None => match key {
                EnumKey::Name(n) => n.to_string(),
                other => other.to_string(),
            },
        },
    }
}
