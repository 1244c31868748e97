//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. `condition` is quoted throughout so the column name
//! never collides with a keyword.

/// Checks whether the patients table has already been created.
pub const PATIENTS_TABLE_EXISTS: &str = r#"
SELECT EXISTS (
    SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'patients'
)
"#;

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 100),
    age INTEGER NOT NULL CHECK (age >= 0),
    "condition" TEXT NOT NULL CHECK (length("condition") BETWEEN 1 AND 100)
);
"#;

pub const SELECT_ALL_PATIENTS: &str = r#"
SELECT id, name, age, "condition"
FROM patients
ORDER BY id ASC
"#;

pub const INSERT_PATIENT: &str = r#"
INSERT INTO patients (name, age, "condition")
VALUES (?1, ?2, ?3)
RETURNING id, name, age, "condition"
"#;

pub const PING: &str = "SELECT 1";
