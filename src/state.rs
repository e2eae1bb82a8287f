//! Shared application state.
//!
//! `AppState` owns the clinic database connection and the caller-identity
//! accessor supplied by the embedding host. The host serializes calls;
//! the mutex is the seam that realizes that guarantee for embeddings with
//! more than one entry point. Constructed once at startup and shared.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use thiserror::Error;

use crate::db::{self, DatabaseError};
use crate::identity::{IdentityAccessor, Principal};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("State lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub struct AppState {
    db: Mutex<Connection>,
    identity: Box<dyn IdentityAccessor>,
}

impl AppState {
    /// Open the database at `path` and wrap it with the given identity
    /// accessor.
    pub fn open(path: &Path, identity: Box<dyn IdentityAccessor>) -> Result<Self, CoreError> {
        let conn = db::open_database(path)?;
        Ok(Self {
            db: Mutex::new(conn),
            identity,
        })
    }

    /// In-memory state (for testing).
    pub fn in_memory(identity: Box<dyn IdentityAccessor>) -> Result<Self, CoreError> {
        let conn = db::open_memory_database()?;
        Ok(Self {
            db: Mutex::new(conn),
            identity,
        })
    }

    /// Lock the database for the duration of one call.
    pub fn db(&self) -> Result<MutexGuard<'_, Connection>, CoreError> {
        self.db.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Resolve the invoking principal for the current call.
    pub fn caller(&self) -> Principal {
        self.identity.caller()
    }
}
