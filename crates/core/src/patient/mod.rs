mod error;
mod requests;
mod types;

pub use error::ValidationError;
pub use requests::CreatePatientRequest;
pub use types::{NewPatient, Patient, MAX_TEXT_LEN};
