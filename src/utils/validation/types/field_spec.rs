//! Declarative description of an entity: which fields it knows, what they
//! default to, and the ordered rule chain each one goes through.

use serde_json::{Map, Value};

use super::EntityKind;
use crate::utils::validation::{blank::is_blank, rules::Rule};

/// Whether a field has to be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// A blank value is rejected with the given message.
    Required(&'static str),
    /// A blank value is accepted and the remaining checks are skipped.
    Optional,
}

/// Value a field takes in the normalized record when the caller omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    EmptyText,
    Flag(bool),
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            DefaultValue::EmptyText => Value::String(String::new()),
            DefaultValue::Flag(flag) => Value::Bool(flag),
        }
    }
}

/// A rule paired with the message reported when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub rule: Rule,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub presence: Presence,
    /// `None` keeps the field out of the normalized record when it is absent.
    pub default: Option<DefaultValue>,
    /// Evaluated in order on non-blank values; the first failure wins.
    pub checks: &'static [Check],
}

impl FieldSpec {
    /// Returns the message of the first rule this field fails in `record`,
    /// or `None` when the field is acceptable.
    pub fn first_failure(&self, record: &Map<String, Value>) -> Option<&'static str> {
        let value = record.get(self.name);

        if is_blank(value) {
            return match self.presence {
                Presence::Required(message) => Some(message),
                Presence::Optional => None,
            };
        }

        let value = value?;
        self.checks
            .iter()
            .find(|check| !check.rule.passes(value, record))
            .map(|check| check.message)
    }
}

/// The full field table of one entity kind.
#[derive(Debug)]
pub struct EntitySpec {
    pub kind: EntityKind,
    pub fields: &'static [FieldSpec],
}

impl EntitySpec {
    /// Builds the defaults record every normalized record starts from.
    pub fn defaults(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .default
                    .map(|default| (field.name.to_string(), default.to_value()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static SAMPLE: EntitySpec = EntitySpec {
        kind: EntityKind::Post,
        fields: &[
            FieldSpec {
                name: "title",
                presence: Presence::Required("Title is required."),
                default: Some(DefaultValue::EmptyText),
                checks: &[
                    Check {
                        rule: Rule::Length { min: 3, max: 10 },
                        message: "Title length.",
                    },
                    Check {
                        rule: Rule::Url,
                        message: "Title url.",
                    },
                ],
            },
            FieldSpec {
                name: "link",
                presence: Presence::Optional,
                default: None,
                checks: &[Check {
                    rule: Rule::Url,
                    message: "Link url.",
                }],
            },
            FieldSpec {
                name: "pinned",
                presence: Presence::Optional,
                default: Some(DefaultValue::Flag(false)),
                checks: &[],
            },
        ],
    };

    fn field(name: &str) -> &'static FieldSpec {
        SAMPLE
            .fields
            .iter()
            .find(|field| field.name == name)
            .expect("Unknown sample field")
    }

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_defaults_only_cover_defaulted_fields() {
        let defaults = SAMPLE.defaults();

        assert_eq!(Value::Object(defaults), json!({ "title": "", "pinned": false }));
    }

    #[test]
    fn test_first_failing_check_wins() {
        let title = field("title");

        assert_eq!(title.first_failure(&record(json!({}))), Some("Title is required."));
        assert_eq!(title.first_failure(&record(json!({ "title": "ab" }))), Some("Title length."));
        assert_eq!(title.first_failure(&record(json!({ "title": "abcd" }))), Some("Title url."));
        assert_eq!(title.first_failure(&record(json!({ "title": "a.io" }))), None);
    }

    #[test]
    fn test_optional_blank_skips_checks() {
        let link = field("link");

        assert_eq!(link.first_failure(&record(json!({}))), None);
        assert_eq!(link.first_failure(&record(json!({ "link": "  " }))), None);
        assert_eq!(link.first_failure(&record(json!({ "link": "nope" }))), Some("Link url."));
    }
}
