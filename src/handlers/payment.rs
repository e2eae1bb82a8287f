use rusqlite::Connection;
use uuid::Uuid;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::models::{
    Appointment, CreatePaymentRequest, Patient, Payment, PaymentStatus, UpdatePaymentRequest,
};

use super::validate::{fetch, non_empty, require_exists, require_fields};

pub fn create_payment(
    conn: &Connection,
    payload: CreatePaymentRequest,
) -> Result<Payment, ServiceError> {
    require_fields(&[
        &payload.appointment_id,
        &payload.patient_id,
        &payload.payment_method,
    ])?;
    require_exists::<Appointment>(conn, &payload.appointment_id)?;
    require_exists::<Patient>(conn, &payload.patient_id)?;

    let payment = Payment {
        id: Uuid::new_v4().to_string(),
        appointment_id: payload.appointment_id,
        patient_id: payload.patient_id,
        amount: payload.amount,
        status: PaymentStatus::Pending,
        payment_method: payload.payment_method,
    };
    EntityStore::<Payment>::new(conn).insert(&payment)?;
    tracing::info!("Created payment {}", payment.id);
    Ok(payment)
}

pub fn get_payment(conn: &Connection, id: &str) -> Result<Payment, ServiceError> {
    fetch(conn, id)
}

pub fn get_payments_by_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<Vec<Payment>, ServiceError> {
    let payments = EntityStore::<Payment>::new(conn)
        .values()?
        .into_iter()
        .filter(|p| p.patient_id == patient_id)
        .collect();
    non_empty(payments, "payments")
}

/// Shallow merge: payload fields win, absent fields keep prior values.
/// Reference fields are not re-validated here.
pub fn update_payment(
    conn: &Connection,
    id: &str,
    payload: UpdatePaymentRequest,
) -> Result<Payment, ServiceError> {
    let existing: Payment = fetch(conn, id)?;
    let merged = Payment {
        id: existing.id,
        appointment_id: payload.appointment_id.unwrap_or(existing.appointment_id),
        patient_id: payload.patient_id.unwrap_or(existing.patient_id),
        amount: payload.amount.unwrap_or(existing.amount),
        status: payload.status.unwrap_or(existing.status),
        payment_method: payload.payment_method.unwrap_or(existing.payment_method),
    };
    EntityStore::<Payment>::new(conn).insert(&merged)?;
    Ok(merged)
}

/// Unconditional status overwrite; there is no transition check.
pub fn update_payment_status(
    conn: &Connection,
    id: &str,
    status: PaymentStatus,
) -> Result<Payment, ServiceError> {
    let mut payment: Payment = fetch(conn, id)?;
    payment.status = status;
    EntityStore::<Payment>::new(conn).insert(&payment)?;
    tracing::info!("Payment {id} status set to {}", status.as_str());
    Ok(payment)
}
