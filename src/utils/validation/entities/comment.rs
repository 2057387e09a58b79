//! Comment attached to an existing post.

use serde::Deserialize;
use serde_json::Value;

use crate::utils::error_messages::{AUTHOR_NAME_BLANK, COMMENT_TEXT_BLANK, COMMENT_TEXT_LENGTH};
use crate::utils::validation::{
    engine, Check, DefaultValue, EntityKind, EntitySpec, FieldSpec, Presence, Rule,
    ValidationResult, MAX_CONTENT_LENGTH, MIN_CONTENT_LENGTH,
};

pub static COMMENT: EntitySpec = EntitySpec {
    kind: EntityKind::Comment,
    fields: &[
        FieldSpec {
            name: "text",
            presence: Presence::Required(COMMENT_TEXT_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[Check {
                rule: Rule::Length {
                    min: MIN_CONTENT_LENGTH,
                    max: MAX_CONTENT_LENGTH,
                },
                message: COMMENT_TEXT_LENGTH,
            }],
        },
        FieldSpec {
            name: "name",
            presence: Presence::Required(AUTHOR_NAME_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommentForm {
    pub text: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Validates a comment: text of 6 to 1024 characters and an author name.
pub fn validate_comment_input(input: &Value) -> ValidationResult {
    engine::validate(&COMMENT, input)
}
