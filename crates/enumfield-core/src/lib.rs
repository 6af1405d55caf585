//! # enumfield-core: Enumerations With Transitions
//!
//! A closed set of named integer values with optional labels, an optional
//! default and an optional transition table restricting which value changes
//! are legal. This crate is the leaf of the workspace; the field, form and
//! serializer adapters in `enumfield-adapters` only call into the contract
//! defined here.
//!
//! ## Components
//!
//! - **Registry** (`definition.rs`): [`EnumDefinition`], built once through
//!   [`EnumDefinitionBuilder`] and immutable afterwards. `choices`, `items`,
//!   `default`, `get`, `get_name`, `get_label`.
//!
//! - **Lookup** (`key.rs`, `member.rs`): [`EnumKey`] states whether a lookup
//!   passes a value, a name or a resolved [`Member`]. Lookups are soft and
//!   return `None` when nothing matches.
//!
//! - **Transition validator** (`transition.rs`): single-hop allow-list
//!   check, total over all inputs.
//!
//! - **Validation entry point** (`validate.rs`): membership then transition
//!   check, raising [`EnumError`]. Names are lookup keys only, never
//!   values: validation rejects them.
//!
//! - **Declarations** (`declaration.rs`): YAML/JSON vocabularies loaded into
//!   the same builder.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No process-wide mutable state; definitions are shared by reference.

pub mod choice;
pub mod declaration;
pub mod definition;
pub mod error;
pub mod key;
pub mod member;
pub mod transition;
pub mod validate;

pub use choice::Choice;
pub use declaration::{definitions_from_yaml, EnumDeclaration, MemberDeclaration};
pub use definition::{EnumDefinition, EnumDefinitionBuilder};
pub use error::{DefinitionError, EnumError};
pub use key::EnumKey;
pub use member::Member;
pub use validate::{validate_available_choice, validate_transition};
