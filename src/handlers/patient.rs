use rusqlite::Connection;
use uuid::Uuid;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::identity::Principal;
use crate::models::{CreatePatientRequest, Patient, UpdatePatientRequest};

use super::validate::{fetch, non_empty, require_fields};

pub fn create_patient(
    conn: &Connection,
    caller: &Principal,
    payload: CreatePatientRequest,
) -> Result<Patient, ServiceError> {
    require_fields(&[
        &payload.name,
        &payload.gender,
        &payload.phone,
        &payload.email,
        &payload.address,
        &payload.emergency_contact.name,
        &payload.emergency_contact.phone,
        &payload.emergency_contact.relationship,
    ])?;

    let patient = Patient {
        id: Uuid::new_v4().to_string(),
        owner: caller.clone(),
        name: payload.name,
        age: payload.age,
        gender: payload.gender,
        phone: payload.phone,
        email: payload.email,
        address: payload.address,
        emergency_contact: payload.emergency_contact,
        allergies: payload.allergies,
        current_medications: payload.current_medications,
        medical_history: payload.medical_history,
    };
    EntityStore::<Patient>::new(conn).insert(&patient)?;
    tracing::info!("Created patient {}", patient.id);
    Ok(patient)
}

pub fn get_patient(conn: &Connection, id: &str) -> Result<Patient, ServiceError> {
    fetch(conn, id)
}

/// First record owned by the caller, in insertion order.
pub fn get_patient_by_owner(
    conn: &Connection,
    caller: &Principal,
) -> Result<Patient, ServiceError> {
    EntityStore::<Patient>::new(conn)
        .values()?
        .into_iter()
        .find(|p| p.owner == *caller)
        .ok_or_else(|| ServiceError::NotFound(format!("No patient found for owner {caller}")))
}

/// Case-insensitive substring match on the patient name.
pub fn search_patients_by_name(conn: &Connection, name: &str) -> Result<Vec<Patient>, ServiceError> {
    let needle = name.to_lowercase();
    let patients = EntityStore::<Patient>::new(conn)
        .values()?
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect();
    non_empty(patients, "patients")
}

pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, ServiceError> {
    non_empty(EntityStore::<Patient>::new(conn).values()?, "patients")
}

/// Shallow merge: payload fields win, absent fields keep prior values.
pub fn update_patient(
    conn: &Connection,
    id: &str,
    payload: UpdatePatientRequest,
) -> Result<Patient, ServiceError> {
    let existing: Patient = fetch(conn, id)?;
    let merged = Patient {
        id: existing.id,
        owner: existing.owner,
        name: payload.name.unwrap_or(existing.name),
        age: payload.age.unwrap_or(existing.age),
        gender: payload.gender.unwrap_or(existing.gender),
        phone: payload.phone.unwrap_or(existing.phone),
        email: payload.email.unwrap_or(existing.email),
        address: payload.address.unwrap_or(existing.address),
        emergency_contact: payload
            .emergency_contact
            .unwrap_or(existing.emergency_contact),
        allergies: payload.allergies.unwrap_or(existing.allergies),
        current_medications: payload
            .current_medications
            .unwrap_or(existing.current_medications),
        medical_history: payload.medical_history.unwrap_or(existing.medical_history),
    };
    EntityStore::<Patient>::new(conn).insert(&merged)?;
    Ok(merged)
}

pub fn delete_patient(conn: &Connection, id: &str) -> Result<String, ServiceError> {
    fetch::<Patient>(conn, id)?;
    EntityStore::<Patient>::new(conn).remove(id)?;
    tracing::info!("Deleted patient {id}");
    Ok(format!("Patient with id {id} deleted"))
}
