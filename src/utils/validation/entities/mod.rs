//! One field table, entry point and typed form per entity kind.

use serde::{Deserialize, Deserializer};

pub mod comment;
pub mod education;
pub mod experience;
pub mod login;
pub mod post;
pub mod profile;
pub mod register;

pub use comment::{validate_comment_input, CommentForm};
pub use education::{validate_education_input, EducationForm};
pub use experience::{validate_experience_input, ExperienceForm};
pub use login::{validate_login_input, LoginForm};
pub use post::{validate_post_input, PostForm};
pub use profile::{validate_profile_input, ProfileForm};
pub use register::{validate_register_input, RegisterForm};

/// Reads an optional boolean flag, treating `null` like an absent value.
fn flag_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
