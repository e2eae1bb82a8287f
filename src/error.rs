use thiserror::Error;

use crate::db::DatabaseError;

/// Tagged result vocabulary for entity operations.
///
/// The set is closed; callers match exhaustively. Delete confirmations
/// travel on the `Ok` side as text. `PaymentFailed`/`PaymentCompleted`
/// are declared members of the vocabulary that no current operation
/// produces; payment status changes go through the generic update path.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    #[error("Payment already completed: {0}")]
    PaymentCompleted(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
