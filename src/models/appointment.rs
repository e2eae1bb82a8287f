use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::StoredEntity;

use super::enums::AppointmentStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub reason: String,
    pub appointment_time: DateTime<Utc>,
    /// Defaults to scheduled at creation.
    pub status: AppointmentStatus,
    /// Absent until set via `update_appointment_video_link`.
    pub video_link: Option<String>,
}

impl StoredEntity for Appointment {
    const TABLE: &'static str = "appointments";
    const KIND: &'static str = "Appointment";

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub reason: String,
    pub appointment_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub reason: Option<String>,
    pub appointment_time: Option<DateTime<Utc>>,
    pub status: Option<AppointmentStatus>,
    pub video_link: Option<String>,
}
