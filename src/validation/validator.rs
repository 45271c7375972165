//! Song payload validator
//!
//! Rules:
//! - `title`, `genre`, `performer`: required non-empty strings
//! - `year`: required integer
//! - `duration`: optional integer, null allowed
//! - `albumId`: optional string, null allowed
//! - Unknown keys are ignored; they are dropped when the payload is extracted
//!
//! The validator never mutates the body and never consults the catalog.

use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Integer,
}

impl FieldKind {
    fn expected(self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Integer => "an integer",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Integer => value.is_i64(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FieldRule {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

const SONG_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "title",
        kind: FieldKind::Text,
        required: true,
    },
    FieldRule {
        name: "year",
        kind: FieldKind::Integer,
        required: true,
    },
    FieldRule {
        name: "genre",
        kind: FieldKind::Text,
        required: true,
    },
    FieldRule {
        name: "performer",
        kind: FieldKind::Text,
        required: true,
    },
    FieldRule {
        name: "duration",
        kind: FieldKind::Integer,
        required: false,
    },
    FieldRule {
        name: "albumId",
        kind: FieldKind::Text,
        required: false,
    },
];

/// Checks song write payloads before they reach the catalog.
///
/// Fields are checked in declaration order and the first failure is
/// reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct SongPayloadValidator;

impl SongPayloadValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a raw create/update body.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the body is not an object, a required
    /// field is missing or null, a field has the wrong type, or a required
    /// string is empty.
    pub fn validate(&self, payload: &Value) -> ValidationResult<()> {
        let object = payload
            .as_object()
            .ok_or_else(|| ValidationError::NotAnObject(json_type_name(payload)))?;

        SONG_FIELDS
            .iter()
            .try_for_each(|rule| validate_field(object, rule))
    }
}

fn validate_field(object: &Map<String, Value>, rule: &FieldRule) -> ValidationResult<()> {
    let value = match object.get(rule.name) {
        None | Some(Value::Null) if rule.required => {
            return Err(ValidationError::MissingField(rule.name));
        }
        None | Some(Value::Null) => return Ok(()),
        Some(value) => value,
    };

    if !rule.kind.accepts(value) {
        return Err(ValidationError::TypeMismatch {
            field: rule.name,
            expected: rule.kind.expected(),
            actual: json_type_name(value),
        });
    }

    if rule.required && value.as_str().is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyField(rule.name));
    }

    Ok(())
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() {
                "int"
            } else if n.is_u64() {
                "out-of-range int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "title": "X",
            "year": 2020,
            "genre": "Pop",
            "performer": "Y",
            "duration": 200,
            "albumId": null
        })
    }

    fn without(field: &str) -> Value {
        let mut body = valid();
        body.as_object_mut().unwrap().remove(field);
        body
    }

    fn with(field: &str, value: Value) -> Value {
        let mut body = valid();
        body[field] = value;
        body
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(SongPayloadValidator::new().validate(&valid()).is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let validator = SongPayloadValidator::new();
        let body = without("duration");
        assert!(validator.validate(&body).is_ok());
        assert!(validator.validate(&without("albumId")).is_ok());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = with("mood", json!("sunny"));
        assert!(SongPayloadValidator::new().validate(&body).is_ok());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let validator = SongPayloadValidator::new();
        for field in ["title", "year", "genre", "performer"] {
            assert_eq!(
                validator.validate(&without(field)),
                Err(ValidationError::MissingField(field))
            );
        }
    }

    #[test]
    fn test_null_required_field_fails() {
        let result = SongPayloadValidator::new().validate(&with("performer", Value::Null));
        assert_eq!(result, Err(ValidationError::MissingField("performer")));
    }

    #[test]
    fn test_type_mismatch_fails() {
        let validator = SongPayloadValidator::new();

        assert_eq!(
            validator.validate(&with("year", json!("2020"))),
            Err(ValidationError::TypeMismatch {
                field: "year",
                expected: "an integer",
                actual: "string",
            })
        );
        assert_eq!(
            validator.validate(&with("duration", json!(3.5))),
            Err(ValidationError::TypeMismatch {
                field: "duration",
                expected: "an integer",
                actual: "float",
            })
        );
        assert!(validator.validate(&with("albumId", json!(7))).is_err());
    }

    #[test]
    fn test_integer_beyond_i64_is_out_of_range() {
        let result = SongPayloadValidator::new().validate(&with("year", json!(u64::MAX)));
        assert_eq!(
            result,
            Err(ValidationError::TypeMismatch {
                field: "year",
                expected: "an integer",
                actual: "out-of-range int",
            })
        );
    }

    #[test]
    fn test_empty_title_fails() {
        let result = SongPayloadValidator::new().validate(&with("title", json!("")));
        assert_eq!(result, Err(ValidationError::EmptyField("title")));
    }

    #[test]
    fn test_non_object_fails() {
        let result = SongPayloadValidator::new().validate(&json!(["title"]));
        assert_eq!(result, Err(ValidationError::NotAnObject("array")));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let validator = SongPayloadValidator::new();
        let body = without("genre");
        for _ in 0..10 {
            assert_eq!(
                validator.validate(&body),
                Err(ValidationError::MissingField("genre"))
            );
        }
    }
}
