//! # enumfield-adapters: Field, Form and Serializer Shims
//!
//! Thin translators between `enumfield-core` definitions and the layers that
//! store, edit and transmit enum values. Each adapter only calls into the
//! core contract (`get`, `choices`, `validate_transition`); none of them
//! adds rules of its own beyond nullability and required-ness.
//!
//! - [`EnumField`] / [`EnumHolder`]: column description and the guarded
//!   slot holding a record's current value.
//! - [`EnumChoiceField`]: selection list and integer coercion for forms.
//! - [`EnumSerializerField`]: value or name representation for JSON payloads.
//! - [`EnumCatalog`]: strict per-app lookup for template contexts.

pub mod catalog;
pub mod field;
pub mod form;
pub mod holder;
pub mod serializer;

pub use catalog::{AppEnums, CatalogError, EnumCatalog};
pub use field::{EnumField, FieldDefault, FieldError};
pub use form::{EnumChoiceField, FormError, SelectOption};
pub use holder::EnumHolder;
pub use serializer::{ChoiceRepr, EnumSerializerField, SerializerError};
