//! Account registration: display name, email and a confirmed password.

use serde::Deserialize;
use serde_json::Value;

use crate::utils::error_messages::{
    REGISTER_EMAIL_BLANK, REGISTER_EMAIL_FORMAT, REGISTER_NAME_BLANK, REGISTER_NAME_LENGTH,
    REGISTER_PASSWORD_BLANK, REGISTER_PASSWORD_CONFIRM_BLANK, REGISTER_PASSWORD_LENGTH,
    REGISTER_PASSWORD_MISMATCH,
};
use crate::utils::validation::{
    engine, Check, DefaultValue, EntityKind, EntitySpec, FieldSpec, Presence, Rule,
    ValidationResult, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};

pub static REGISTER: EntitySpec = EntitySpec {
    kind: EntityKind::Register,
    fields: &[
        FieldSpec {
            name: "name",
            presence: Presence::Required(REGISTER_NAME_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[Check {
                rule: Rule::Length {
                    min: MIN_NAME_LENGTH,
                    max: MAX_NAME_LENGTH,
                },
                message: REGISTER_NAME_LENGTH,
            }],
        },
        FieldSpec {
            name: "email",
            presence: Presence::Required(REGISTER_EMAIL_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[Check {
                rule: Rule::Email,
                message: REGISTER_EMAIL_FORMAT,
            }],
        },
        FieldSpec {
            name: "password",
            presence: Presence::Required(REGISTER_PASSWORD_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[Check {
                rule: Rule::Length {
                    min: MIN_PASSWORD_LENGTH,
                    max: MAX_PASSWORD_LENGTH,
                },
                message: REGISTER_PASSWORD_LENGTH,
            }],
        },
        FieldSpec {
            name: "passwordConfirm",
            presence: Presence::Required(REGISTER_PASSWORD_CONFIRM_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[Check {
                rule: Rule::EqualsField("password"),
                message: REGISTER_PASSWORD_MISMATCH,
            }],
        },
    ],
};

/// Registration data handed to the password hasher once validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Validates a registration body: name, email, password and its confirmation.
pub fn validate_register_input(input: &Value) -> ValidationResult {
    engine::validate(&REGISTER, input)
}
