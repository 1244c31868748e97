use thiserror::Error;

/// Errors raised while validating patient input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },
    #[error("Field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: &'static str },
    #[error("Field '{field}' too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },
    #[error("Field 'age' out of range: {0}")]
    AgeOutOfRange(String),
}
