//! The generic validator every entity goes through:
//! defaults, merge, per-field rule chain, aggregation.

use log::{debug, warn};
use serde_json::Value;

use super::types::{EntityKind, EntitySpec, FieldErrors, ValidationResult};

/// Validates `input` against the field table `spec`.
///
/// The caller's fields are merged over the entity defaults (an explicit
/// `null` still replaces the default) and unknown fields are carried through
/// untouched. Anything other than a JSON object is treated as an input where
/// every field is absent.
pub fn validate(spec: &EntitySpec, input: &Value) -> ValidationResult {
    let mut normalized = spec.defaults();

    match input {
        Value::Object(fields) => {
            for (name, value) in fields {
                normalized.insert(name.clone(), value.clone());
            }
        }
        Value::Null => {}
        other => warn!("{}", non_object_warning(spec.kind, other)),
    }

    let errors: FieldErrors = spec
        .fields
        .iter()
        .filter_map(|field| {
            field
                .first_failure(&normalized)
                .map(|message| (field.name.to_string(), message.to_string()))
        })
        .collect();

    if !errors.is_empty() {
        debug!(
            "{} input rejected on {:?}",
            spec.kind,
            errors.keys().collect::<Vec<_>>()
        );
    }

    ValidationResult::new(normalized, errors)
}

fn non_object_warning(kind: EntityKind, input: &Value) -> String {
    format!(
        "{} input of type {} is not an object; treating every field as absent",
        kind,
        json_type(input)
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    fn hostile_inputs() -> Vec<Value> {
        vec![
            json!(null),
            json!(true),
            json!(0),
            json!("text"),
            json!(["name", "email"]),
            json!({}),
            json!({ "name": null, "text": [], "handle": {} }),
            json!({ "name": 12, "email": false, "password": 3.5, "text": 1024 }),
        ]
    }

    #[test]
    fn test_valid_matches_errors_for_every_kind() {
        for kind in EntityKind::iter() {
            for input in hostile_inputs() {
                let result = validate(kind.spec(), &input);
                assert_eq!(
                    result.is_valid(),
                    result.errors().is_empty(),
                    "{} disagrees on {}",
                    kind,
                    input
                );
            }
        }
    }

    #[test]
    fn test_normalized_always_holds_defaults() {
        for kind in EntityKind::iter() {
            let defaults = kind.spec().defaults();
            for input in hostile_inputs() {
                let result = validate(kind.spec(), &input);
                for key in defaults.keys() {
                    assert!(
                        result.normalized().contains_key(key),
                        "{} lost default {} on {}",
                        kind,
                        key,
                        input
                    );
                }
            }
        }
    }

    #[test]
    fn test_non_object_input_is_all_absent() {
        for kind in EntityKind::iter() {
            let from_text = validate(kind.spec(), &json!("text"));
            let from_empty = validate(kind.spec(), &json!({}));
            assert_eq!(from_text, from_empty, "{} treats a string input differently", kind);
            assert_eq!(from_text.normalized(), &kind.spec().defaults());
        }
    }

    #[test]
    fn test_validation_is_idempotent_and_leaves_input_alone() {
        let input = json!({ "text": "  ", "name": "Ada", "extra": [1, 2] });
        let snapshot = input.clone();

        for kind in EntityKind::iter() {
            let first = validate(kind.spec(), &input);
            let second = validate(kind.spec(), &input);
            assert_eq!(first, second);
        }
        assert_eq!(input, snapshot);
    }

    fn valid_sample(kind: EntityKind) -> Value {
        match kind {
            EntityKind::Register => json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "secret12",
                "passwordConfirm": "secret12",
            }),
            EntityKind::Login => json!({ "email": "ada@example.com", "password": "secret12" }),
            EntityKind::Post | EntityKind::Comment => json!({ "text": "Hello there", "name": "Ada" }),
            EntityKind::Profile => json!({ "handle": "ada", "status": "Dev", "skills": "rust" }),
            EntityKind::Experience => json!({ "title": "Eng", "company": "AE", "from": "1843" }),
            EntityKind::Education => json!({
                "school": "HEIG-VD",
                "degree": "BSc",
                "fieldOfStudy": "CS",
                "from": "2021",
            }),
        }
    }

    #[test]
    fn test_blank_required_field_is_the_only_error() {
        use crate::utils::validation::types::Presence;

        for kind in EntityKind::iter() {
            let sample = valid_sample(kind);
            assert!(validate(kind.spec(), &sample).is_valid(), "Sample for {} is invalid", kind);

            for field in kind.spec().fields {
                let Presence::Required(message) = field.presence else {
                    continue;
                };
                // Blanking the password also breaks its confirmation
                if field.name == "password" && kind == EntityKind::Register {
                    continue;
                }

                for blank in [Value::Null, json!(""), json!(" \t ")] {
                    let mut input = sample.clone();
                    input[field.name] = blank.clone();
                    let result = validate(kind.spec(), &input);
                    assert_eq!(result.errors().len(), 1, "{}.{} = {}", kind, field.name, blank);
                    assert_eq!(result.error(field.name), Some(message));
                }

                let mut input = sample.clone();
                input.as_object_mut().unwrap().remove(field.name);
                assert_eq!(validate(kind.spec(), &input).error(field.name), Some(message));
            }
        }
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let result = validate(
            EntityKind::Login.spec(),
            &json!({ "email": "a@b.co", "password": "pw", "remember": true }),
        );

        assert!(result.is_valid());
        assert_eq!(result.normalized().get("remember"), Some(&json!(true)));
    }

    #[test]
    fn test_non_object_warning_names_the_type() {
        assert_eq!(
            non_object_warning(EntityKind::Post, &json!(["a"])),
            "post input of type array is not an object; treating every field as absent"
        );
        assert_eq!(
            non_object_warning(EntityKind::Login, &json!(7)),
            "login input of type number is not an object; treating every field as absent"
        );
    }

    #[test]
    fn test_explicit_null_replaces_default() {
        let result = validate(EntityKind::Login.spec(), &json!({ "email": null }));

        assert_eq!(result.normalized().get("email"), Some(&Value::Null));
        assert!(result.error("email").is_some());
    }
}
