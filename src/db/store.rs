//! Generic keyed store: one table per entity type, each a map from a
//! generated id to the serialized record.

use std::marker::PhantomData;

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::DatabaseError;

/// A record that lives in one of the per-entity keyed stores.
pub trait StoredEntity: Serialize + DeserializeOwned {
    /// Table backing this entity's store.
    const TABLE: &'static str;

    /// Human-readable entity kind, used in error messages.
    const KIND: &'static str;

    /// The record's key in its store.
    fn key(&self) -> &str;
}

/// Keyed store over a single entity table.
///
/// `insert` is insert-or-replace. Enumeration via `values` is
/// insertion-order-stable across the store's lifetime: upserts keep the
/// original rowid. All by-field lookups are full scans over `values`,
/// which holds only at clinic-scale collection sizes.
pub struct EntityStore<'c, T> {
    conn: &'c Connection,
    _marker: PhantomData<T>,
}

impl<'c, T: StoredEntity> EntityStore<'c, T> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            _marker: PhantomData,
        }
    }

    pub fn get(&self, id: &str) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT data FROM {} WHERE id = ?1", T::TABLE);
        let result = self
            .conn
            .query_row(&sql, params![id], |row| row.get::<_, String>(0));

        match result {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn insert(&self, entity: &T) -> Result<(), DatabaseError> {
        let data = serde_json::to_string(entity)?;
        let sql = format!(
            "INSERT INTO {} (id, data) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET data = excluded.data",
            T::TABLE
        );
        self.conn.execute(&sql, params![entity.key(), data])?;
        Ok(())
    }

    pub fn remove(&self, id: &str) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", T::TABLE);
        self.conn.execute(&sql, params![id])?;
        Ok(())
    }

    /// All records, in insertion order.
    pub fn values(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT data FROM {} ORDER BY rowid", T::TABLE);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(serde_json::from_str(&row?)?);
        }
        Ok(records)
    }

    pub fn count(&self) -> Result<u64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
