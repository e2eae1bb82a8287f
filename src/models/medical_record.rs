use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;

/// One record per patient; the patient id is the store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub patient_id: String,
    pub consultation_notes: Vec<String>,
    pub prescriptions: Vec<String>,
    pub lab_results: Vec<String>,
    pub immunizations: Vec<String>,
}

impl StoredEntity for MedicalRecord {
    const TABLE: &'static str = "medical_records";
    const KIND: &'static str = "Medical record";

    fn key(&self) -> &str {
        &self.patient_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMedicalRecordRequest {
    pub patient_id: String,
    pub consultation_notes: Vec<String>,
    pub prescriptions: Vec<String>,
    pub lab_results: Vec<String>,
    pub immunizations: Vec<String>,
}

/// Updates overwrite the list fields wholesale; there is no merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMedicalRecordRequest {
    pub consultation_notes: Vec<String>,
    pub prescriptions: Vec<String>,
    pub lab_results: Vec<String>,
    pub immunizations: Vec<String>,
}
