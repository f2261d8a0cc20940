//! Movie write-payload validation.
//!
//! Write payloads arrive as untyped JSON. [`validate_new_movie`] and
//! [`validate_movie_changes`] turn them into typed values or reject the whole
//! payload with one [`FieldViolation`] per offending field.

use serde::Serialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Entity name used in not-found messages.
pub const ENTITY: &str = "Movie";

/// Fields subject to the non-empty rule.
const REQUIRED_FIELDS: [&str; 2] = ["movie", "description"];

/// Violations are reported in this order regardless of which check found them.
const FIELD_ORDER: [&str; 3] = ["movie", "description", "image"];

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// A movie that passed create validation and may be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewMovie {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub movie: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    pub image: Option<String>,
}

/// Field overwrites for an existing movie. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct MovieChanges {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub movie: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
    /// `Some(None)` clears the image.
    pub image: Option<Option<String>>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.movie.is_none() && self.description.is_none() && self.image.is_none()
    }
}

/// Validate a create payload.
///
/// `movie` and `description` must be present, non-empty strings. `image` may
/// be absent, `null` or any string, including the empty one.
pub fn validate_new_movie(payload: &Value) -> Result<NewMovie, CoreError> {
    let object = as_object(payload)?;
    let mut violations = Vec::new();

    let movie = required_string(object, "movie", &mut violations);
    let description = required_string(object, "description", &mut violations);
    let image = optional_string(object, "image", &mut violations).flatten();

    let candidate = NewMovie {
        movie: movie.unwrap_or_default().to_string(),
        description: description.unwrap_or_default().to_string(),
        image: image.map(str::to_string),
    };
    merge_length_violations(candidate.validate(), &mut violations);
    finish(candidate, violations)
}

/// Validate an update payload.
///
/// Every field is optional, but a field that is present must obey the create
/// rule: `movie` and `description` cannot be emptied or nulled. Unknown keys
/// (including `_id` and `id`) are ignored, so the identifier is never
/// reassigned.
pub fn validate_movie_changes(payload: &Value) -> Result<MovieChanges, CoreError> {
    let object = as_object(payload)?;
    let mut violations = Vec::new();

    let movie = present_string(object, "movie", &mut violations);
    let description = present_string(object, "description", &mut violations);
    let image = optional_string(object, "image", &mut violations);

    let changes = MovieChanges {
        movie: movie.map(str::to_string),
        description: description.map(str::to_string),
        image: image.map(|i| i.map(str::to_string)),
    };
    merge_length_violations(changes.validate(), &mut violations);
    finish(changes, violations)
}

fn finish<T>(value: T, mut violations: Vec<FieldViolation>) -> Result<T, CoreError> {
    if violations.is_empty() {
        return Ok(value);
    }
    violations.sort_by_key(|v| FIELD_ORDER.iter().position(|f| *f == v.field));
    Err(CoreError::InvalidPayload(violations))
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, CoreError> {
    payload.as_object().ok_or_else(|| {
        CoreError::InvalidPayload(vec![FieldViolation::new("body", "must be a JSON object")])
    })
}

fn required_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    match object.get(field) {
        Some(Value::String(s)) => Some(s.as_str()),
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new(field, "is required"));
            None
        }
        Some(_) => {
            violations.push(FieldViolation::new(field, "must be a string"));
            None
        }
    }
}

/// Like [`required_string`], but absence is fine.
fn present_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    match object.get(field) {
        None => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Null) => {
            violations.push(FieldViolation::new(field, "cannot be null"));
            None
        }
        Some(_) => {
            violations.push(FieldViolation::new(field, "must be a string"));
            None
        }
    }
}

/// Outer `None`: absent. `Some(None)`: explicit `null`.
fn optional_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Option<&'a str>> {
    match object.get(field) {
        None => None,
        Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.as_str())),
        Some(_) => {
            violations.push(FieldViolation::new(field, "must be a string"));
            None
        }
    }
}

/// Add length-rule failures for fields that have not already been reported.
fn merge_length_violations(
    result: Result<(), ValidationErrors>,
    violations: &mut Vec<FieldViolation>,
) {
    let Err(errors) = result else {
        return;
    };
    let field_errors = errors.field_errors();

    for field in REQUIRED_FIELDS {
        if violations.iter().any(|v| v.field == field) {
            continue;
        }
        if let Some(first) = field_errors.get(field).and_then(|errs| errs.first()) {
            let message = first.message.as_deref().unwrap_or("is invalid");
            violations.push(FieldViolation::new(field, message));
        }
    }
}
