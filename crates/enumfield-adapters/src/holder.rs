//! # Enum Holder
//!
//! The slot that stores the current value of one enum field on one record.
//! Mutation goes through [`EnumHolder::assign`], which validates the change
//! against the previous value and commits only on success. The owning
//! record decides when to call it; nothing intercepts plain field writes.

use enumfield_core::{EnumError, EnumKey, Member};

use crate::field::{EnumField, FieldError};

/// Current value of an enum field, guarded by its transition rules.
#[derive(Debug, Clone)]
pub struct EnumHolder<'d> {
    field: EnumField<'d>,
    current: Option<i64>,
}

impl<'d> EnumHolder<'d> {
    pub(crate) fn bootstrap(field: EnumField<'d>, initial: Option<i64>) -> Self {
        Self {
            field,
            current: initial,
        }
    }

    /// The field this holder belongs to.
    pub fn field(&self) -> &EnumField<'d> {
        &self.field
    }

    /// Current member, `None` when empty.
    pub fn get(&self) -> Option<Member<'d>> {
        self.current.and_then(|v| self.field.definition().get(v))
    }

    /// Current raw value.
    pub fn value(&self) -> Option<i64> {
        self.current
    }

    /// Whether the holder currently has no value.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Replace the current value, validating the change first.
    ///
    /// On rejection the previous value is kept. A member name is not a
    /// value; resolve it with [`EnumDefinition::get`](enumfield_core::EnumDefinition::get) first.
    pub fn assign<'a>(&mut self, key: impl Into<EnumKey<'a>>) -> Result<Member<'d>, FieldError> {
        let key: EnumKey<'a> = key.into();
        self.field.validate(self.current, Some(key))?;
        let definition = self.field.definition();
        let member = definition
            .get(key)
            .ok_or_else(|| EnumError::InvalidChoice {
                value: key.to_string(),
                enum_name: definition.name().to_string(),
            })?;
        self.current = Some(member.value());
        Ok(member)
    }

    /// Set the value to empty. Fails on non-nullable fields.
    pub fn assign_none(&mut self) -> Result<(), FieldError> {
        self.field.validate(self.current, None::<EnumKey<'_>>)?;
        self.current = None;
        Ok(())
    }

    /// Drop the value without validation, as deleting the attribute does.
    ///
    /// A later [`assign`](Self::assign) starts from an empty origin, which
    /// only unconstrained enums accept.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Replace the value with what storage holds, bypassing transition checks.
    pub fn load(&mut self, column: Option<i64>) {
        self.current = self.field.from_column(column).map(|m| m.value());
    }

    /// Stored representation of the current value.
    pub fn to_column(&self) -> Option<i64> {
        self.field.to_column(self.get())
    }

    /// Check the value before it is written: non-nullable fields must hold a member.
    pub fn check(&self) -> Result<(), FieldError> {
        self.field.validate(self.current, self.current)
    }

    /// Label of the current value, empty when there is none.
    pub fn display(&self) -> &'d str {
        self.get().map(|m| m.label()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use enumfield_core::EnumDefinition;

    use super::*;
    use crate::field::FieldDefault;

    fn lamp_state() -> EnumDefinition {
        EnumDefinition::builder("LampState")
            .member("OFF", 0)
            .member("ON", 1)
            .default_value(0)
            .build()
            .unwrap()
    }

    fn person_status() -> EnumDefinition {
        EnumDefinition::builder("PersonStatus")
            .member("UNBORN", 0)
            .member("ALIVE", 1)
            .member("DEAD", 2)
            .member("REANIMATED", 3)
            .member("VOID", 4)
            .transition(0, [4])
            .transition(1, [0])
            .transition(2, [0, 1])
            .transition(3, [2])
            .build()
            .unwrap()
    }

    #[test]
    fn unconstrained_holder_accepts_any_member() {
        let lamp = lamp_state();
        let mut holder = EnumField::new(&lamp).holder().unwrap();
        assert_eq!(holder.value(), Some(0));
        holder.assign(1).unwrap();
        assert_eq!(holder.get().map(|m| m.name()), Some("ON"));
        let off = lamp.get("OFF").unwrap();
        holder.assign(off).unwrap();
        assert_eq!(holder.value(), Some(0));
    }

    #[test]
    fn rejected_value_is_not_committed() {
        let lamp = lamp_state();
        let mut holder = EnumField::new(&lamp).holder().unwrap();
        let err = holder.assign(99).unwrap_err();
        assert!(matches!(err, FieldError::Enum(EnumError::InvalidChoice { .. })));
        assert_eq!(holder.value(), Some(0));
    }

    #[test]
    fn constrained_holder_follows_table() {
        let person = person_status();
        let field = EnumField::new(&person).with_default(FieldDefault::Value(1));
        let mut holder = field.holder().unwrap();

        assert!(holder.assign(0).is_err());
        assert_eq!(holder.value(), Some(1));

        let dead = holder.assign(2).unwrap();
        assert_eq!(dead.name(), "DEAD");

        assert!(holder.assign(4).is_err());
        assert_eq!(holder.value(), Some(2));

        holder.assign(person.get("REANIMATED").unwrap()).unwrap();
        assert_eq!(holder.display(), "REANIMATED");
    }

    #[test]
    fn self_assignment_is_always_allowed() {
        let person = person_status();
        let mut holder = EnumField::new(&person).holder_with(4).unwrap();
        assert!(holder.assign(4).is_ok());
    }

    #[test]
    fn name_is_rejected_and_not_committed() {
        let lamp = lamp_state();
        let mut holder = EnumField::new(&lamp).holder().unwrap();
        let err = holder.assign("ON").unwrap_err();
        assert!(matches!(err, FieldError::Enum(EnumError::InvalidChoice { .. })));
        assert_eq!(holder.value(), Some(0));
        assert!(EnumField::new(&lamp).holder_with("ON").is_err());
    }

    #[test]
    fn clear_then_assign_depends_on_mode() {
        let lamp = lamp_state();
        let mut holder = EnumField::new(&lamp).holder().unwrap();
        holder.clear();
        assert!(holder.is_empty());
        assert!(holder.check().is_err());
        holder.assign(1).unwrap();
        assert!(holder.check().is_ok());

        let person = person_status();
        let mut holder = EnumField::new(&person).holder_with(1).unwrap();
        holder.clear();
        assert!(holder.assign(2).is_err());
        assert!(holder.is_empty());
    }

    #[test]
    fn assign_none_respects_nullability() {
        let lamp = lamp_state();
        let mut required = EnumField::new(&lamp).holder().unwrap();
        assert!(matches!(
            required.assign_none(),
            Err(FieldError::NullNotAllowed { .. })
        ));
        assert_eq!(required.value(), Some(0));

        let mut optional = EnumField::new(&lamp).nullable(true).holder().unwrap();
        optional.assign_none().unwrap();
        assert_eq!(optional.to_column(), None);
        assert_eq!(optional.display(), "");
    }

    #[test]
    fn load_bypasses_transitions() {
        let person = person_status();
        let mut holder = EnumField::new(&person).holder_with(2).unwrap();
        holder.load(Some(0));
        assert_eq!(holder.value(), Some(0));
        holder.load(Some(77));
        assert!(holder.is_empty());
    }
}
