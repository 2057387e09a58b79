//! Education entry added to a profile.

use serde::Deserialize;
use serde_json::Value;

use crate::utils::error_messages::{
    EDUCATION_DEGREE_BLANK, EDUCATION_FIELD_OF_STUDY_BLANK, EDUCATION_SCHOOL_BLANK,
    FROM_DATE_BLANK,
};
use crate::utils::validation::{
    engine, DefaultValue, EntityKind, EntitySpec, FieldSpec, Presence, ValidationResult,
};

pub static EDUCATION: EntitySpec = EntitySpec {
    kind: EntityKind::Education,
    fields: &[
        FieldSpec {
            name: "school",
            presence: Presence::Required(EDUCATION_SCHOOL_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
        FieldSpec {
            name: "degree",
            presence: Presence::Required(EDUCATION_DEGREE_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
        FieldSpec {
            name: "fieldOfStudy",
            presence: Presence::Required(EDUCATION_FIELD_OF_STUDY_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
        FieldSpec {
            name: "from",
            presence: Presence::Required(FROM_DATE_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
        FieldSpec {
            name: "current",
            presence: Presence::Optional,
            default: Some(DefaultValue::Flag(false)),
            checks: &[],
        },
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationForm {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "super::flag_or_false")]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validates an education entry: school, degree, field of study and start date.
pub fn validate_education_input(input: &Value) -> ValidationResult {
    engine::validate(&EDUCATION, input)
}
