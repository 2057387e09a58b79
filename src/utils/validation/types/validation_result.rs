//! Outcome of validating one request body.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::utils::error_messages::FormError;

/// Field name to the single message explaining why it was rejected.
pub type FieldErrors = BTreeMap<String, String>;

/// The normalized record plus the per-field errors found in it.
///
/// `valid` is derived from `errors` at construction and the fields are only
/// exposed read-only, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    normalized: Map<String, Value>,
    errors: FieldErrors,
}

impl ValidationResult {
    /// Wraps a normalized record and its field errors; `valid` is set from
    /// whether `errors` is empty.
    pub fn new(normalized: Map<String, Value>, errors: FieldErrors) -> Self {
        Self {
            valid: errors.is_empty(),
            normalized,
            errors,
        }
    }

    /// True iff no field was rejected.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Input merged over the entity defaults.
    pub fn normalized(&self) -> &Map<String, Value> {
        &self.normalized
    }

    /// One message per rejected field, keyed by field name.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the message attached to `field`, if it was rejected.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Converts a valid result into a typed form.
    ///
    /// # Returns
    /// * `Ok(F)` if the record was valid and has the shape of `F`
    /// * `Err(FormError::Invalid)` carrying the field errors otherwise
    /// * `Err(FormError::Shape)` if a valid record cannot be read as `F`
    pub fn into_form<F: DeserializeOwned>(self) -> Result<F, FormError> {
        if !self.valid {
            return Err(FormError::Invalid {
                errors: self.errors,
            });
        }

        Ok(serde_json::from_value(Value::Object(self.normalized))?)
    }
}
