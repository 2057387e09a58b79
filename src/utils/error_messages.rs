//! Every user-facing message produced by the validators, and the error type
//! returned when a validated record is turned into a typed form.

use thiserror::Error;

use crate::utils::validation::FieldErrors;

// Registration
pub const REGISTER_NAME_BLANK: &str = "Name must be given.";
pub const REGISTER_NAME_LENGTH: &str = "Name must be between 2 and 30 characters in length.";
pub const REGISTER_EMAIL_BLANK: &str = "Email must be given.";
pub const REGISTER_EMAIL_FORMAT: &str =
    "Email must be given in email address format, e.g my.self@myemaildomain.com.";
pub const REGISTER_PASSWORD_BLANK: &str = "Password must be given.";
pub const REGISTER_PASSWORD_LENGTH: &str =
    "Password must be between 8 and 30 characters in length.";
pub const REGISTER_PASSWORD_CONFIRM_BLANK: &str = "Password must be confirmed.";
pub const REGISTER_PASSWORD_MISMATCH: &str = "The two passwords must match.";

// Login
pub const LOGIN_EMAIL_BLANK: &str = "Email is required to sign in.";
pub const LOGIN_PASSWORD_BLANK: &str = "Password is required to sign in.";

// Posts and comments
pub const POST_TEXT_BLANK: &str = "Text is required.";
pub const POST_TEXT_LENGTH: &str = "Posts must be between 6 and 1024 characters.";
pub const COMMENT_TEXT_BLANK: &str = "Comments must not be blank. Please fill in your comment.";
pub const COMMENT_TEXT_LENGTH: &str = "Comments must be between 6 and 1024 characters.";
pub const AUTHOR_NAME_BLANK: &str = "Name is required.";

// Profile
pub const PROFILE_HANDLE_BLANK: &str = "Handle is required.";
pub const PROFILE_HANDLE_LENGTH: &str = "Handle must be between 2 and 40 characters in length.";
pub const PROFILE_STATUS_BLANK: &str = "Status is required.";
pub const PROFILE_SKILLS_BLANK: &str = "Skills is required.";
pub const PROFILE_WEBSITE_URL: &str = "Website must be a URL.";
pub const PROFILE_YOUTUBE_URL: &str = "Youtube must be a URL.";
pub const PROFILE_TWITTER_URL: &str = "Twitter must be a URL.";
pub const PROFILE_FACEBOOK_URL: &str = "Facebook must be a URL.";
pub const PROFILE_LINKEDIN_URL: &str = "Linkedin must be a URL.";
pub const PROFILE_INSTAGRAM_URL: &str = "Instagram must be a URL.";

// Experience and education
pub const EXPERIENCE_TITLE_BLANK: &str = "Job title is required.";
pub const EXPERIENCE_COMPANY_BLANK: &str = "Company is required.";
pub const EDUCATION_SCHOOL_BLANK: &str = "School is required.";
pub const EDUCATION_DEGREE_BLANK: &str = "Degree is required.";
pub const EDUCATION_FIELD_OF_STUDY_BLANK: &str = "Field of study is required.";
pub const FROM_DATE_BLANK: &str = "From date is required.";

/// Failure to turn a validation result into one of the typed forms.
#[derive(Debug, Error)]
pub enum FormError {
    /// At least one field was rejected by the validator.
    #[error("Validation failed: {} field(s) rejected", .errors.len())]
    Invalid { errors: FieldErrors },

    /// The record passed validation but does not have the shape of the form,
    /// e.g. a non-blank number where a string is expected.
    #[error("Validation failed: normalized record does not match the form")]
    Shape(#[from] serde_json::Error),
}

impl FormError {
    /// Field errors to send back to the client, if validation is what failed.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FormError::Invalid { errors } => Some(errors),
            FormError::Shape(_) => None,
        }
    }
}
