//! Validation helpers shared by all entity handlers.

use rusqlite::Connection;

use crate::db::{EntityStore, StoredEntity};
use crate::error::ServiceError;

pub(crate) const MISSING_FIELDS: &str = "Missing required fields";

/// Required string fields must be non-empty after trimming.
///
/// The error is deliberately coarse and does not name the offending
/// field. Required numerics are present by construction in the typed
/// payload structs.
pub fn require_fields(fields: &[&str]) -> Result<(), ServiceError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ServiceError::InvalidPayload(MISSING_FIELDS.into()));
    }
    Ok(())
}

/// Resolve a foreign-key reference. A miss is a payload error naming the
/// referenced entity kind and id.
pub fn require_exists<T: StoredEntity>(conn: &Connection, id: &str) -> Result<T, ServiceError> {
    EntityStore::<T>::new(conn).get(id)?.ok_or_else(|| {
        ServiceError::InvalidPayload(format!("{} with id {id} does not exist", T::KIND))
    })
}

/// Fetch a record by id for read/update/delete. A miss is `NotFound`.
pub fn fetch<T: StoredEntity>(conn: &Connection, id: &str) -> Result<T, ServiceError> {
    EntityStore::<T>::new(conn)
        .get(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("{} with id {id} not found", T::KIND)))
}

/// Uniform list contract: an empty result is `NotFound`, never an empty
/// list.
pub fn non_empty<T>(records: Vec<T>, what: &str) -> Result<Vec<T>, ServiceError> {
    if records.is_empty() {
        return Err(ServiceError::NotFound(format!("No {what} found")));
    }
    Ok(records)
}
