//! Field-level validation errors, shaped like the usual schema-validation
//! `detail` entries: a location path, a human message and an error type.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Minimum length of `todo_name`, in characters.
pub const NAME_MIN_CHARS: usize = 3;
/// Maximum length of `todo_name`, in characters.
pub const NAME_MAX_CHARS: usize = 502;

/// One offending input location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Where the bad value came from, e.g. `["body", "todo_name"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn new(loc: &[&str], kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| (*s).to_string()).collect(),
            msg: msg.into(),
            kind,
        }
    }

    pub fn body(field: &str, kind: &'static str, msg: impl Into<String>) -> Self {
        Self::new(&["body", field], kind, msg)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

/// A request payload or parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// `Ok(())` when no field failed.
    pub fn collect(errors: impl IntoIterator<Item = FieldError>) -> Result<(), Self> {
        let errors: Vec<FieldError> = errors.into_iter().collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check `todo_name` against the length bounds.
pub fn check_name(name: &str) -> Option<FieldError> {
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        Some(FieldError::body(
            "todo_name",
            "string_too_short",
            format!("String should have at least {NAME_MIN_CHARS} characters"),
        ))
    } else if len > NAME_MAX_CHARS {
        Some(FieldError::body(
            "todo_name",
            "string_too_long",
            format!("String should have at most {NAME_MAX_CHARS} characters"),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_boundaries() {
        assert!(check_name(&"a".repeat(2)).is_some());
        assert!(check_name(&"a".repeat(3)).is_none());
        assert!(check_name(&"a".repeat(502)).is_none());
        assert!(check_name(&"a".repeat(503)).is_some());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // three characters, six bytes
        assert!(check_name("äöü").is_none());
    }

    #[test]
    fn too_short_name_reports_field_and_type() {
        let err = check_name("ab").unwrap();
        assert_eq!(err.loc, vec!["body", "todo_name"]);
        assert_eq!(err.kind, "string_too_short");
        assert_eq!(err.msg, "String should have at least 3 characters");
    }

    #[test]
    fn error_display_joins_fields() {
        let err = ValidationError {
            errors: vec![
                FieldError::body("todo_name", "string_too_long", "too long"),
                FieldError::new(&["path", "todo_id"], "int_parsing", "not an integer"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "body.todo_name: too long; path.todo_id: not an integer"
        );
    }

    #[test]
    fn field_error_serializes_type_key() {
        let json = serde_json::to_value(FieldError::body("todo_name", "missing", "Field required"))
            .unwrap();
        assert_eq!(json["type"], "missing");
        assert_eq!(json["loc"][1], "todo_name");
    }
}
