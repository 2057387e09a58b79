//! Root module for the validation system.
//! Exposes the per-entity validators, the generic engine and the result types.

mod blank;
mod constants;
mod engine;
mod entities;
mod rules;
mod types;

// Re-export commonly used types and functions
pub use blank::is_blank;
pub use constants::*;
pub use engine::validate;
pub use entities::{
    validate_comment_input, validate_education_input, validate_experience_input,
    validate_login_input, validate_post_input, validate_profile_input, validate_register_input,
    CommentForm, EducationForm, ExperienceForm, LoginForm, PostForm, ProfileForm, RegisterForm,
};
pub use rules::{is_email, is_url, Rule};
pub use types::{
    Check, DefaultValue, EntityKind, EntitySpec, FieldErrors, FieldSpec, Presence,
    ValidationResult,
};
