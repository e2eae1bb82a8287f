use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub medications: Vec<String>,
    pub instructions: String,
    /// Set server-side at creation; not part of any update payload.
    pub issued_at: DateTime<Utc>,
}

impl StoredEntity for Prescription {
    const TABLE: &'static str = "prescriptions";
    const KIND: &'static str = "Prescription";

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrescriptionRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub medications: Vec<String>,
    pub instructions: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePrescriptionRequest {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub medications: Option<Vec<String>>,
    pub instructions: Option<String>,
}
