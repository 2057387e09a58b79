//! Validation and normalization of the request bodies accepted by the
//! DevConnect backend.
//!
//! Every mutating endpoint hands its raw JSON body to one of the validators
//! exported here before touching storage. A validator never fails: it always
//! returns a [`ValidationResult`] holding the normalized record and one error
//! message per rejected field.

pub mod consts;
pub mod utils;

pub use utils::error_messages::FormError;
pub use utils::validation::{
    validate, validate_comment_input, validate_education_input, validate_experience_input,
    validate_login_input, validate_post_input, validate_profile_input, validate_register_input,
    CommentForm, EducationForm, EntityKind, EntitySpec, ExperienceForm, FieldErrors, LoginForm,
    PostForm, ProfileForm, RegisterForm, ValidationResult,
};
