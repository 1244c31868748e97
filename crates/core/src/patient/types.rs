use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length, in characters, of the `name` and `condition` columns.
pub const MAX_TEXT_LEN: usize = 100;

/// A patient record as persisted by the store.
///
/// Serializes as `{"id", "name", "age", "condition"}` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Store-assigned identifier, immutable once created.
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub condition: String,
}

/// A validated patient that has not been persisted yet.
///
/// Fields are private so every instance has passed [`NewPatient::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    name: String,
    age: i32,
    condition: String,
}

impl NewPatient {
    /// Validates the fields and builds a new patient.
    ///
    /// `name` and `condition` must be non-blank and at most [`MAX_TEXT_LEN`]
    /// characters; `age` must not be negative.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        condition: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let condition = condition.into();

        validate_text("name", &name)?;
        if age < 0 {
            return Err(ValidationError::AgeOutOfRange(age.to_string()));
        }
        validate_text("condition", &condition)?;

        Ok(Self {
            name,
            age,
            condition,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Attaches the store-assigned id.
    pub fn into_patient(self, id: i64) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            condition: self.condition,
        }
    }
}

fn validate_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}
