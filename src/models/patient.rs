use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;
use crate::identity::Principal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    /// Identity of the creating caller, stamped at creation.
    pub owner: Principal,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: EmergencyContact,
    pub allergies: Vec<String>,
    pub current_medications: Vec<String>,
    pub medical_history: Vec<String>,
}

impl StoredEntity for Patient {
    const TABLE: &'static str = "patients";
    const KIND: &'static str = "Patient";

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: EmergencyContact,
    pub allergies: Vec<String>,
    pub current_medications: Vec<String>,
    pub medical_history: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub allergies: Option<Vec<String>>,
    pub current_medications: Option<Vec<String>>,
    pub medical_history: Option<Vec<String>>,
}
