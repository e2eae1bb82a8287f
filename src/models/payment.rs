use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;

use super::enums::PaymentStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub appointment_id: String,
    pub patient_id: String,
    pub amount: f64,
    /// Starts pending at creation.
    pub status: PaymentStatus,
    pub payment_method: String,
}

impl StoredEntity for Payment {
    const TABLE: &'static str = "payments";
    const KIND: &'static str = "Payment";

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub appointment_id: String,
    pub patient_id: String,
    pub amount: f64,
    pub payment_method: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePaymentRequest {
    pub appointment_id: Option<String>,
    pub patient_id: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<PaymentStatus>,
    pub payment_method: Option<String>,
}
