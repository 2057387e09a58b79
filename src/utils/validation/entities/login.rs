//! Sign-in credentials. Only presence is checked here; whether they match an
//! account is decided by the authentication layer.

use serde::Deserialize;
use serde_json::Value;

use crate::utils::error_messages::{LOGIN_EMAIL_BLANK, LOGIN_PASSWORD_BLANK};
use crate::utils::validation::{
    engine, DefaultValue, EntityKind, EntitySpec, FieldSpec, Presence, ValidationResult,
};

pub static LOGIN: EntitySpec = EntitySpec {
    kind: EntityKind::Login,
    fields: &[
        FieldSpec {
            name: "email",
            presence: Presence::Required(LOGIN_EMAIL_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
        FieldSpec {
            name: "password",
            presence: Presence::Required(LOGIN_PASSWORD_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Validates a sign-in body: email and password must both be filled in.
pub fn validate_login_input(input: &Value) -> ValidationResult {
    engine::validate(&LOGIN, input)
}
