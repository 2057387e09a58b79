//! The blank check shared by every field rule.
//!
//! Missing and present-but-empty values are indistinguishable downstream, so a
//! single predicate decides both. It looks at the JSON type of the value rather
//! than at its truthiness: `false` and `0` are real answers, not blanks.

use serde_json::Value;

/// Returns whether a field value counts as blank.
///
/// A value is blank when it is absent, `null`, a string that is empty once
/// surrounding whitespace is trimmed, or an empty array or object.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(fields)) => fields.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
    }
}
