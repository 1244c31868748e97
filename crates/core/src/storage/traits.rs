use async_trait::async_trait;

use crate::patient::{NewPatient, Patient};

use super::Result;

/// Repository for patient records.
///
/// The store owns id assignment; implementations must hand out a fresh,
/// unique id on every successful [`create_patient`](Self::create_patient).
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Returns all patients in insertion order (ascending id).
    async fn list_patients(&self) -> Result<Vec<Patient>>;

    /// Persists a patient and returns it with its assigned id.
    async fn create_patient(&self, patient: &NewPatient) -> Result<Patient>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;
}
