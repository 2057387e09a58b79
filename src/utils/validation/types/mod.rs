//! Type definitions for the validation system

mod entity_kind;
mod field_spec;
mod validation_result;

// Re-export commonly used types
pub use entity_kind::EntityKind;
pub use field_spec::{Check, DefaultValue, EntitySpec, FieldSpec, Presence};
pub use validation_result::{FieldErrors, ValidationResult};
