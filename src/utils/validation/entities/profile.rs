//! Developer profile: handle, status, skills and optional social links.

use serde::Deserialize;
use serde_json::Value;

use crate::utils::error_messages::{
    PROFILE_FACEBOOK_URL, PROFILE_HANDLE_BLANK, PROFILE_HANDLE_LENGTH, PROFILE_INSTAGRAM_URL,
    PROFILE_LINKEDIN_URL, PROFILE_SKILLS_BLANK, PROFILE_STATUS_BLANK, PROFILE_TWITTER_URL,
    PROFILE_WEBSITE_URL, PROFILE_YOUTUBE_URL,
};
use crate::utils::validation::{
    engine, Check, DefaultValue, EntityKind, EntitySpec, FieldSpec, Presence, Rule,
    ValidationResult, MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH,
};

/// Optional link, checked as a URL only when filled in.
macro_rules! social_link {
    ($name:literal, $message:expr) => {
        FieldSpec {
            name: $name,
            presence: Presence::Optional,
            default: None,
            checks: &[Check {
                rule: Rule::Url,
                message: $message,
            }],
        }
    };
}

pub static PROFILE: EntitySpec = EntitySpec {
    kind: EntityKind::Profile,
    fields: &[
        FieldSpec {
            name: "handle",
            presence: Presence::Required(PROFILE_HANDLE_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[Check {
                rule: Rule::Length {
                    min: MIN_HANDLE_LENGTH,
                    max: MAX_HANDLE_LENGTH,
                },
                message: PROFILE_HANDLE_LENGTH,
            }],
        },
        FieldSpec {
            name: "status",
            presence: Presence::Required(PROFILE_STATUS_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
        FieldSpec {
            name: "skills",
            presence: Presence::Required(PROFILE_SKILLS_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
        social_link!("website", PROFILE_WEBSITE_URL),
        social_link!("youtube", PROFILE_YOUTUBE_URL),
        social_link!("twitter", PROFILE_TWITTER_URL),
        social_link!("facebook", PROFILE_FACEBOOK_URL),
        social_link!("linkedin", PROFILE_LINKEDIN_URL),
        social_link!("instagram", PROFILE_INSTAGRAM_URL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileForm {
    pub handle: String,
    pub status: String,
    /// Comma separated, as typed by the user. See [`ProfileForm::skills_list`].
    pub skills: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

impl ProfileForm {
    /// Splits `skills` on commas. Segments are trimmed and empty ones
    /// (from a trailing or doubled comma) are dropped.
    pub fn skills_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Validates a profile: handle, status, skills, and any social links given.
pub fn validate_profile_input(input: &Value) -> ValidationResult {
    engine::validate(&PROFILE, input)
}
