//! Telecare: CRUD backend for a telehealth record-keeping service.
//!
//! Entities (departments, doctors, patients, consultations, chats,
//! appointments, prescriptions, payments, medical records) live in
//! independent keyed stores; handlers validate payloads, check
//! referential existence, and persist under generated ids. A small set
//! of pure health-metric calculators rounds out the service surface.

pub mod calculators;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod state;

pub use error::ServiceError;
pub use identity::{IdentityAccessor, Principal, StaticIdentity};
pub use state::AppState;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embeddings that do not install their own
/// subscriber. RUST_LOG overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
