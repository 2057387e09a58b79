//! Work experience entry added to a profile.

use serde::Deserialize;
use serde_json::Value;

use crate::utils::error_messages::{
    EXPERIENCE_COMPANY_BLANK, EXPERIENCE_TITLE_BLANK, FROM_DATE_BLANK,
};
use crate::utils::validation::{
    engine, DefaultValue, EntityKind, EntitySpec, FieldSpec, Presence, ValidationResult,
};

pub static EXPERIENCE: EntitySpec = EntitySpec {
    kind: EntityKind::Experience,
    fields: &[
        FieldSpec {
            name: "title",
            presence: Presence::Required(EXPERIENCE_TITLE_BLANK),
            default: Some(DefaultValue::EmptyText),
            checks: &[],
        },
        FieldSpec {
            name: "company",
            presence: Presence::Required(EXPERIENCE_COMPANY_BLANK),
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
pub struct ExperienceForm {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Start date as submitted by the client.
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "super::flag_or_false")]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validates a work experience entry: title, company and start date.
pub fn validate_experience_input(input: &Value) -> ValidationResult {
    engine::validate(&EXPERIENCE, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields() {
        let result = validate_experience_input(&json!({ "location": "Lausanne" }));

        assert_eq!(result.error("title"), Some(EXPERIENCE_TITLE_BLANK));
        assert_eq!(result.error("company"), Some(EXPERIENCE_COMPANY_BLANK));
        assert_eq!(result.error("from"), Some(FROM_DATE_BLANK));
        assert_eq!(result.errors().len(), 3);
    }

    #[test]
    fn test_current_defaults_to_false() {
        let result = validate_experience_input(&json!({
            "title": "Engineer",
            "company": "Analytical Engines",
            "from": "1843-01-01",
        }));

        assert_eq!(result.normalized().get("current"), Some(&json!(false)));
        let form: ExperienceForm = result.into_form().unwrap();
        assert!(!form.current);
        assert!(form.to.is_none());
    }

    #[test]
    fn test_submitted_current_wins() {
        let result = validate_experience_input(&json!({
            "title": "Engineer",
            "company": "Analytical Engines",
            "from": "1843-01-01",
            "to": "1852-11-27",
            "current": true,
        }));

        let form: ExperienceForm = result.into_form().unwrap();
        assert!(form.current);
        assert_eq!(form.to.as_deref(), Some("1852-11-27"));
    }

    #[test]
    fn test_null_current_reads_as_false() {
        let result = validate_experience_input(&json!({
            "title": "Engineer",
            "company": "Analytical Engines",
            "from": "1843-01-01",
            "current": null,
        }));

        assert!(result.is_valid());
        let form: ExperienceForm = result.into_form().unwrap();
        assert!(!form.current);
    }
}
