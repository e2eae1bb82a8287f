use rusqlite::Connection;
use uuid::Uuid;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::models::{CreateDepartmentRequest, Department, UpdateDepartmentRequest};

use super::validate::{fetch, non_empty, require_fields};

pub fn create_department(
    conn: &Connection,
    payload: CreateDepartmentRequest,
) -> Result<Department, ServiceError> {
    require_fields(&[&payload.name, &payload.description])?;

    let store = EntityStore::<Department>::new(conn);
    // Name uniqueness is a case-sensitive scan over the whole store.
    if store.values()?.iter().any(|d| d.name == payload.name) {
        return Err(ServiceError::InvalidPayload(format!(
            "Department with name {} already exists",
            payload.name
        )));
    }

    let department = Department {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
    };
    store.insert(&department)?;
    tracing::info!("Created department {}", department.id);
    Ok(department)
}

pub fn get_department(conn: &Connection, id: &str) -> Result<Department, ServiceError> {
    fetch(conn, id)
}

pub fn get_all_departments(conn: &Connection) -> Result<Vec<Department>, ServiceError> {
    non_empty(
        EntityStore::<Department>::new(conn).values()?,
        "departments",
    )
}

/// Shallow merge: payload fields win, absent fields keep prior values.
pub fn update_department(
    conn: &Connection,
    id: &str,
    payload: UpdateDepartmentRequest,
) -> Result<Department, ServiceError> {
    let existing: Department = fetch(conn, id)?;
    let merged = Department {
        id: existing.id,
        name: payload.name.unwrap_or(existing.name),
        description: payload.description.unwrap_or(existing.description),
    };
    EntityStore::<Department>::new(conn).insert(&merged)?;
    Ok(merged)
}

pub fn delete_department(conn: &Connection, id: &str) -> Result<String, ServiceError> {
    fetch::<Department>(conn, id)?;
    EntityStore::<Department>::new(conn).remove(id)?;
    tracing::info!("Deleted department {id}");
    Ok(format!("Department with id {id} deleted"))
}
