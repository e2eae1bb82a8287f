use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub message: String,
    /// Set server-side at creation.
    pub timestamp: DateTime<Utc>,
}

impl StoredEntity for Chat {
    const TABLE: &'static str = "chats";
    const KIND: &'static str = "Chat";

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateChatRequest {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub message: Option<String>,
}
