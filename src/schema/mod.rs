//! Declarative request-shape validation.
//!
//! Each operation declares an [`ObjectSchema`] for its path parameters or
//! body; a single generic [`validate`] evaluates it. Structural checks
//! (object type, required-ness, per-field string type, closed field set)
//! run before field-level format and length checks, and every violation is
//! collected in declaration order - the caller surfaces the first as the
//! headline message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

pub mod users;

/// HTML5-style email pattern: local part, `@`, dot-separated domain labels
/// of at most 63 characters each.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Uuid,
    Email,
}

/// Constraints for a single named field. All fields are strings.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub format: Option<Format>,
    pub min_length: Option<usize>,
}

/// Accepted shape of one request part (`body` or `params`).
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    /// Pointer prefix used in violation messages, e.g. "body".
    pub location: &'static str,
    pub fields: &'static [FieldRule],
    /// When false, fields outside the declared set are rejected.
    pub additional_properties: bool,
}

/// A single rule violation, rendered as `<pointer> <detail>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub pointer: String,
    pub detail: String,
}

impl Violation {
    pub fn new(pointer: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.pointer, self.detail)
    }
}

/// Validate `input` against `schema`.
///
/// Pure function of its inputs; returns every violation found or nothing.
pub fn validate(schema: &ObjectSchema, input: &Value) -> Result<(), Vec<Violation>> {
    let Some(object) = input.as_object() else {
        return Err(vec![Violation::new(schema.location, "must be object")]);
    };

    let mut violations = Vec::new();

    // Structural pass: required-ness and string type, declaration order
    for field in schema.fields {
        match object.get(field.name) {
            None if field.required => violations.push(Violation::new(
                schema.location,
                format!("must have required property '{}'", field.name),
            )),
            Some(value) if !value.is_string() => violations.push(Violation::new(
                format!("{}/{}", schema.location, field.name),
                "must be string",
            )),
            _ => {}
        }
    }

    // Structural pass: closed field set
    if !schema.additional_properties {
        for key in object.keys() {
            if !schema.fields.iter().any(|f| f.name == key) {
                violations.push(Violation::new(
                    schema.location,
                    "must NOT have additional properties",
                ));
            }
        }
    }

    // Field-level pass: format and length, declaration order
    for field in schema.fields {
        let Some(value) = object.get(field.name).and_then(|v| v.as_str()) else {
            continue;
        };

        match field.format {
            Some(Format::Uuid) if Uuid::parse_str(value).is_err() => {
                violations.push(Violation::new(
                    format!("{}/{}", schema.location, field.name),
                    "should be a valid UUID",
                ));
            }
            Some(Format::Email) if !EMAIL.is_match(value) => {
                violations.push(Violation::new(
                    format!("{}/{}", schema.location, field.name),
                    "should be a valid email address",
                ));
            }
            _ => {}
        }

        if let Some(min) = field.min_length {
            if value.chars().count() < min {
                violations.push(Violation::new(
                    format!("{}/{}", schema.location, field.name),
                    format!("should be a at least {} characters long", min),
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
