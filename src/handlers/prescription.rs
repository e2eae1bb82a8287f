use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::models::{
    CreatePrescriptionRequest, Doctor, Patient, Prescription, UpdatePrescriptionRequest,
};

use super::validate::{fetch, non_empty, require_exists, require_fields};

pub fn create_prescription(
    conn: &Connection,
    payload: CreatePrescriptionRequest,
) -> Result<Prescription, ServiceError> {
    require_fields(&[&payload.patient_id, &payload.doctor_id, &payload.instructions])?;
    require_exists::<Patient>(conn, &payload.patient_id)?;
    require_exists::<Doctor>(conn, &payload.doctor_id)?;

    let prescription = Prescription {
        id: Uuid::new_v4().to_string(),
        patient_id: payload.patient_id,
        doctor_id: payload.doctor_id,
        medications: payload.medications,
        instructions: payload.instructions,
        issued_at: Utc::now(),
    };
    EntityStore::<Prescription>::new(conn).insert(&prescription)?;
    tracing::info!("Created prescription {}", prescription.id);
    Ok(prescription)
}

pub fn get_prescription(conn: &Connection, id: &str) -> Result<Prescription, ServiceError> {
    fetch(conn, id)
}

pub fn get_prescriptions_by_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<Vec<Prescription>, ServiceError> {
    let prescriptions = EntityStore::<Prescription>::new(conn)
        .values()?
        .into_iter()
        .filter(|p| p.patient_id == patient_id)
        .collect();
    non_empty(prescriptions, "prescriptions")
}

/// Shallow merge: payload fields win, absent fields keep prior values.
/// `issued_at` is not part of the payload and therefore immutable.
pub fn update_prescription(
    conn: &Connection,
    id: &str,
    payload: UpdatePrescriptionRequest,
) -> Result<Prescription, ServiceError> {
    let existing: Prescription = fetch(conn, id)?;
    let merged = Prescription {
        id: existing.id,
        patient_id: payload.patient_id.unwrap_or(existing.patient_id),
        doctor_id: payload.doctor_id.unwrap_or(existing.doctor_id),
        medications: payload.medications.unwrap_or(existing.medications),
        instructions: payload.instructions.unwrap_or(existing.instructions),
        issued_at: existing.issued_at,
    };
    EntityStore::<Prescription>::new(conn).insert(&merged)?;
    Ok(merged)
}
