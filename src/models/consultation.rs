use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: String,
    pub patient_id: String,
    pub problem: String,
    pub department_id: String,
}

impl StoredEntity for Consultation {
    const TABLE: &'static str = "consultations";
    const KIND: &'static str = "Consultation";

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultationRequest {
    pub patient_id: String,
    pub problem: String,
    pub department_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateConsultationRequest {
    pub patient_id: Option<String>,
    pub problem: Option<String>,
    pub department_id: Option<String>,
}
