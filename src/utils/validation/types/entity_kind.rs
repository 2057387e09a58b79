//! The seven kinds of request body the backend validates.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::{EntitySpec, ValidationResult};
use crate::utils::validation::{engine, entities};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Register,
    Login,
    Post,
    Comment,
    Profile,
    Experience,
    Education,
}

impl EntityKind {
    /// Field table used to validate this kind of input.
    pub fn spec(self) -> &'static EntitySpec {
        match self {
            EntityKind::Register => &entities::register::REGISTER,
            EntityKind::Login => &entities::login::LOGIN,
            EntityKind::Post => &entities::post::POST,
            EntityKind::Comment => &entities::comment::COMMENT,
            EntityKind::Profile => &entities::profile::PROFILE,
            EntityKind::Experience => &entities::experience::EXPERIENCE,
            EntityKind::Education => &entities::education::EDUCATION,
        }
    }

    /// Validates a raw request body as this kind of input.
    pub fn validate(self, input: &Value) -> ValidationResult {
        engine::validate(self.spec(), input)
    }
}
