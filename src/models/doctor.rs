use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;
use crate::identity::Principal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    /// Identity of the creating caller, stamped at creation.
    pub owner: Principal,
    pub name: String,
    pub department_id: String,
    pub image: String,
    /// Absent until first set via `update_doctor_availability`.
    pub available: Option<bool>,
}

impl StoredEntity for Doctor {
    const TABLE: &'static str = "doctors";
    const KIND: &'static str = "Doctor";

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub department_id: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub department_id: Option<String>,
    pub image: Option<String>,
}
