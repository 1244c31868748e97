//! SQLite repository implementation.
//!
//! Implements [`PatientRepository`] from `medicare_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use medicare_core::patient::{NewPatient, Patient};
use medicare_core::storage::{PatientRepository, Result};

use super::conversions::row_to_patient;
use super::error::{map_open_error, map_tokio_rusqlite_error};
use super::schema;
use super::target::DatabaseTarget;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// A single `tokio_rusqlite` connection runs queries on its own thread; SQLite
/// serializes writes, so each insert is atomic and ids never repeat.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens the database named by a connection string and ensures the schema.
    ///
    /// See [`DatabaseTarget::parse`] for the accepted forms.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let conn = match DatabaseTarget::parse(database_url)? {
            DatabaseTarget::Memory => Connection::open_in_memory().await,
            DatabaseTarget::File(path) => Connection::open(path).await,
        }
        .map_err(map_open_error)?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().await.map_err(map_open_error)?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates the patients table unless it already exists.
    async fn init_schema(conn: &Connection) -> Result<()> {
        let created = conn
            .call(|conn| {
                let exists: bool = conn
                    .query_row(schema::PATIENTS_TABLE_EXISTS, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                if !exists {
                    conn.execute_batch(schema::CREATE_TABLES)
                        .map_err(wrap_err)?;
                }
                Ok(!exists)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Schema"))?;

        if created {
            tracing::info!("Created patients table");
        } else {
            tracing::info!("Patients table already present, schema unchanged");
        }

        Ok(())
    }
}

#[async_trait]
impl PatientRepository for SqliteRepository {
    async fn list_patients(&self) -> Result<Vec<Patient>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_PATIENTS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_patient).map_err(wrap_err)?;

                let mut patients = Vec::new();
                for row_result in rows {
                    patients.push(row_result.map_err(wrap_err)?);
                }
                Ok(patients)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Patient"))
    }

    async fn create_patient(&self, patient: &NewPatient) -> Result<Patient> {
        let name = patient.name().to_string();
        let age = patient.age();
        let condition = patient.condition().to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_PATIENT,
                    rusqlite::params![name, age, condition],
                    row_to_patient,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Patient"))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Store"))
    }
}
