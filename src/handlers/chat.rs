use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::models::{Chat, CreateChatRequest, Doctor, Patient, UpdateChatRequest};

use super::validate::{fetch, non_empty, require_exists, require_fields};

pub fn create_chat(conn: &Connection, payload: CreateChatRequest) -> Result<Chat, ServiceError> {
    require_fields(&[&payload.patient_id, &payload.doctor_id, &payload.message])?;
    require_exists::<Patient>(conn, &payload.patient_id)?;
    require_exists::<Doctor>(conn, &payload.doctor_id)?;

    let chat = Chat {
        id: Uuid::new_v4().to_string(),
        patient_id: payload.patient_id,
        doctor_id: payload.doctor_id,
        message: payload.message,
        timestamp: Utc::now(),
    };
    EntityStore::<Chat>::new(conn).insert(&chat)?;
    Ok(chat)
}

pub fn get_chat(conn: &Connection, id: &str) -> Result<Chat, ServiceError> {
    fetch(conn, id)
}

pub fn get_chats_by_patient(conn: &Connection, patient_id: &str) -> Result<Vec<Chat>, ServiceError> {
    let chats = EntityStore::<Chat>::new(conn)
        .values()?
        .into_iter()
        .filter(|c| c.patient_id == patient_id)
        .collect();
    non_empty(chats, "chats")
}

/// Shallow merge: payload fields win, absent fields keep prior values.
/// The creation timestamp is never touched.
pub fn update_chat(
    conn: &Connection,
    id: &str,
    payload: UpdateChatRequest,
) -> Result<Chat, ServiceError> {
    let existing: Chat = fetch(conn, id)?;
    let merged = Chat {
        id: existing.id,
        patient_id: payload.patient_id.unwrap_or(existing.patient_id),
        doctor_id: payload.doctor_id.unwrap_or(existing.doctor_id),
        message: payload.message.unwrap_or(existing.message),
        timestamp: existing.timestamp,
    };
    EntityStore::<Chat>::new(conn).insert(&merged)?;
    Ok(merged)
}
