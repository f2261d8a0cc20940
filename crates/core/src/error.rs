use crate::movie::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {}", summarize(.0))]
    InvalidPayload(Vec<FieldViolation>),
}

/// Join violations into one line, e.g. `movie is required; image must be a string`.
pub fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
