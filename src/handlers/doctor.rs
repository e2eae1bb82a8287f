use rusqlite::Connection;
use uuid::Uuid;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::identity::Principal;
use crate::models::{CreateDoctorRequest, Department, Doctor, UpdateDoctorRequest};

use super::validate::{fetch, non_empty, require_exists, require_fields};

pub fn create_doctor(
    conn: &Connection,
    caller: &Principal,
    payload: CreateDoctorRequest,
) -> Result<Doctor, ServiceError> {
    require_fields(&[&payload.name, &payload.department_id, &payload.image])?;
    require_exists::<Department>(conn, &payload.department_id)?;

    let doctor = Doctor {
        id: Uuid::new_v4().to_string(),
        owner: caller.clone(),
        name: payload.name,
        department_id: payload.department_id,
        image: payload.image,
        available: None,
    };
    EntityStore::<Doctor>::new(conn).insert(&doctor)?;
    tracing::info!("Created doctor {}", doctor.id);
    Ok(doctor)
}

pub fn get_doctor(conn: &Connection, id: &str) -> Result<Doctor, ServiceError> {
    fetch(conn, id)
}

/// First record owned by the caller, in insertion order.
pub fn get_doctor_by_owner(conn: &Connection, caller: &Principal) -> Result<Doctor, ServiceError> {
    EntityStore::<Doctor>::new(conn)
        .values()?
        .into_iter()
        .find(|d| d.owner == *caller)
        .ok_or_else(|| ServiceError::NotFound(format!("No doctor found for owner {caller}")))
}

pub fn get_doctors_by_department(
    conn: &Connection,
    department_id: &str,
) -> Result<Vec<Doctor>, ServiceError> {
    let doctors = EntityStore::<Doctor>::new(conn)
        .values()?
        .into_iter()
        .filter(|d| d.department_id == department_id)
        .collect();
    non_empty(doctors, "doctors")
}

pub fn get_all_doctors(conn: &Connection) -> Result<Vec<Doctor>, ServiceError> {
    non_empty(EntityStore::<Doctor>::new(conn).values()?, "doctors")
}

/// Shallow merge: payload fields win, absent fields keep prior values.
/// Reference fields are not re-validated here.
pub fn update_doctor(
    conn: &Connection,
    id: &str,
    payload: UpdateDoctorRequest,
) -> Result<Doctor, ServiceError> {
    let existing: Doctor = fetch(conn, id)?;
    let merged = Doctor {
        id: existing.id,
        owner: existing.owner,
        name: payload.name.unwrap_or(existing.name),
        department_id: payload.department_id.unwrap_or(existing.department_id),
        image: payload.image.unwrap_or(existing.image),
        available: existing.available,
    };
    EntityStore::<Doctor>::new(conn).insert(&merged)?;
    Ok(merged)
}

pub fn update_doctor_availability(
    conn: &Connection,
    id: &str,
    available: bool,
) -> Result<Doctor, ServiceError> {
    let mut doctor: Doctor = fetch(conn, id)?;
    doctor.available = Some(available);
    EntityStore::<Doctor>::new(conn).insert(&doctor)?;
    Ok(doctor)
}

pub fn delete_doctor(conn: &Connection, id: &str) -> Result<String, ServiceError> {
    fetch::<Doctor>(conn, id)?;
    EntityStore::<Doctor>::new(conn).remove(id)?;
    tracing::info!("Deleted doctor {id}");
    Ok(format!("Doctor with id {id} deleted"))
}
