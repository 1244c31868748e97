//! API request types for patient operations.
//!
//! Request bodies are checked field by field instead of relying on serde's
//! derive, so callers get a message naming the offending field.

use serde_json::{Map, Value};

use super::{NewPatient, ValidationError};

/// Request payload for creating a new patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: i32,
    pub condition: String,
}

impl CreatePatientRequest {
    /// Extracts a request from an arbitrary JSON document.
    ///
    /// Unknown fields are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        Ok(Self {
            name: string_field(object, "name")?,
            age: age_field(object)?,
            condition: string_field(object, "condition")?,
        })
    }

    /// Applies the record invariants, producing a patient ready to insert.
    pub fn into_new_patient(self) -> Result<NewPatient, ValidationError> {
        NewPatient::new(self.name, self.age, self.condition)
    }
}

fn required<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

fn string_field(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    required(object, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::WrongType {
            field,
            expected: "a string",
        })
}

fn age_field(object: &Map<String, Value>) -> Result<i32, ValidationError> {
    let Value::Number(number) = required(object, "age")? else {
        return Err(ValidationError::WrongType {
            field: "age",
            expected: "an integer",
        });
    };

    if !number.is_i64() && !number.is_u64() {
        return Err(ValidationError::WrongType {
            field: "age",
            expected: "an integer",
        });
    }

    number
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ValidationError::AgeOutOfRange(number.to_string()))
}
