//! # Transition Validator
//!
//! The transition table maps each destination value to the set of origin
//! values it may be reached from. The check is a single hop: a change is
//! legal only when it is listed directly, never because some intermediate
//! value would connect the two.
//!
//! - `from == to` is always legal (self-transition and bootstrap assignment).
//! - No table, or an empty one, means unconstrained mode: every change is legal.
//! - Otherwise the table is a closed allow-list; a destination with no entry
//!   cannot be entered from any other value.

use std::collections::BTreeSet;

use crate::definition::EnumDefinition;
use crate::key::EnumKey;

impl EnumDefinition {
    /// Whether a transition table is declared. `false` means unconstrained mode.
    pub fn has_transitions(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Origins allowed to move into `to`, or `None` when `to` has no entry.
    pub fn transition_origins(&self, to: i64) -> Option<&BTreeSet<i64>> {
        self.transitions.get(&to)
    }

    /// Iterate the declared table as `(destination, origins)`, ascending.
    pub fn transitions(&self) -> impl Iterator<Item = (i64, &BTreeSet<i64>)> + '_ {
        self.transitions.iter().map(|(to, origins)| (*to, origins))
    }

    /// Whether moving from `from` to `to` is legal.
    ///
    /// Total over all inputs: a member name is not a value, so any
    /// transition naming an endpoint by name is illegal rather than raising. Membership of the endpoints
    /// is not checked here; see [`validate_transition`](crate::validate_transition).
    pub fn is_valid_transition<'a, 'b>(
        &self,
        from: impl Into<EnumKey<'a>>,
        to: impl Into<EnumKey<'b>>,
    ) -> bool {
        let (Some(from), Some(to)) = (self.raw_value(from.into()), self.raw_value(to.into())) else {
            return false;
        };
        if from == to || self.transitions.is_empty() {
            return true;
        }
        self.transitions
            .get(&to)
            .is_some_and(|origins| origins.contains(&from))
    }

    /// Normalize a key to a bare integer. Names do not normalize.
    fn raw_value(&self, key: EnumKey<'_>) -> Option<i64> {
        match key {
            EnumKey::Value(v) => Some(v),
            EnumKey::Member(m) => Some(m.value()),
            EnumKey::Name(_) => None,
        }
    }
}
