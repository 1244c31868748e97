//! Patient handlers.
//!
//! Each handler performs at most one repository call; request bodies are
//! validated before the store is touched.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use medicare_core::patient::{CreatePatientRequest, Patient, ValidationError};

use crate::{handlers::AppError, state::AppState};

/// List all patients (GET /patients).
///
/// Returns every record in insertion order; an empty store yields `[]`.
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, AppError> {
    let patients = state.patient_repo.list_patients().await?;

    tracing::debug!(count = patients.len(), "Listed patients");

    Ok(Json(patients))
}

/// Create a new patient (POST /patients).
///
/// Expects `{"name": string, "age": integer, "condition": string}` and returns
/// the stored record with 201.
pub async fn create_patient(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), AppError> {
    let Json(body) = body.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;

    let new_patient = CreatePatientRequest::from_json(&body)?.into_new_patient()?;

    let patient = state.patient_repo.create_patient(&new_patient).await?;

    tracing::info!(patient_id = patient.id, "Created new patient");

    Ok((StatusCode::CREATED, Json(patient)))
}
