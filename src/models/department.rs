use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;

/// Clinical department. Names are unique across the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl StoredEntity for Department {
    const TABLE: &'static str = "departments";
    const KIND: &'static str = "Department";

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}
