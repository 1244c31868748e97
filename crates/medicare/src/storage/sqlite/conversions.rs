//! SQLite row conversion functions.

use medicare_core::patient::Patient;
use rusqlite::Row;

/// Convert a SQLite row to a Patient.
///
/// Expected columns: id, name, age, condition
pub fn row_to_patient(row: &Row) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        condition: row.get(3)?,
    })
}
