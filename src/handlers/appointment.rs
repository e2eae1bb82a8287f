use rusqlite::Connection;
use uuid::Uuid;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::models::{
    Appointment, AppointmentStatus, CreateAppointmentRequest, Doctor, Patient,
    UpdateAppointmentRequest,
};

use super::validate::{fetch, non_empty, require_exists, require_fields};

pub fn create_appointment(
    conn: &Connection,
    payload: CreateAppointmentRequest,
) -> Result<Appointment, ServiceError> {
    require_fields(&[&payload.patient_id, &payload.doctor_id, &payload.reason])?;
    require_exists::<Patient>(conn, &payload.patient_id)?;
    require_exists::<Doctor>(conn, &payload.doctor_id)?;

    let appointment = Appointment {
        id: Uuid::new_v4().to_string(),
        patient_id: payload.patient_id,
        doctor_id: payload.doctor_id,
        reason: payload.reason,
        appointment_time: payload.appointment_time,
        status: AppointmentStatus::Scheduled,
        video_link: None,
    };
    EntityStore::<Appointment>::new(conn).insert(&appointment)?;
    tracing::info!("Created appointment {}", appointment.id);
    Ok(appointment)
}

pub fn get_appointment(conn: &Connection, id: &str) -> Result<Appointment, ServiceError> {
    fetch(conn, id)
}

pub fn get_appointments_by_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<Vec<Appointment>, ServiceError> {
    let appointments = EntityStore::<Appointment>::new(conn)
        .values()?
        .into_iter()
        .filter(|a| a.patient_id == patient_id)
        .collect();
    non_empty(appointments, "appointments")
}

pub fn get_appointments_by_doctor(
    conn: &Connection,
    doctor_id: &str,
) -> Result<Vec<Appointment>, ServiceError> {
    let appointments = EntityStore::<Appointment>::new(conn)
        .values()?
        .into_iter()
        .filter(|a| a.doctor_id == doctor_id)
        .collect();
    non_empty(appointments, "appointments")
}

pub fn get_all_appointments(conn: &Connection) -> Result<Vec<Appointment>, ServiceError> {
    non_empty(
        EntityStore::<Appointment>::new(conn).values()?,
        "appointments",
    )
}

/// Shallow merge: payload fields win, absent fields keep prior values.
/// Reference fields are not re-validated here.
pub fn update_appointment(
    conn: &Connection,
    id: &str,
    payload: UpdateAppointmentRequest,
) -> Result<Appointment, ServiceError> {
    let existing: Appointment = fetch(conn, id)?;
    let merged = Appointment {
        id: existing.id,
        patient_id: payload.patient_id.unwrap_or(existing.patient_id),
        doctor_id: payload.doctor_id.unwrap_or(existing.doctor_id),
        reason: payload.reason.unwrap_or(existing.reason),
        appointment_time: payload.appointment_time.unwrap_or(existing.appointment_time),
        status: payload.status.unwrap_or(existing.status),
        video_link: payload.video_link.or(existing.video_link),
    };
    EntityStore::<Appointment>::new(conn).insert(&merged)?;
    Ok(merged)
}

/// Attach the telehealth video link; the link must be non-empty.
pub fn update_appointment_video_link(
    conn: &Connection,
    id: &str,
    video_link: &str,
) -> Result<Appointment, ServiceError> {
    require_fields(&[video_link])?;

    let mut appointment: Appointment = fetch(conn, id)?;
    appointment.video_link = Some(video_link.to_string());
    EntityStore::<Appointment>::new(conn).insert(&appointment)?;
    Ok(appointment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::db::open_memory_database;
    use crate::handlers::test_support::{make_doctor, make_patient};
    use crate::handlers::validate::MISSING_FIELDS;

    fn request(patient_id: &str, doctor_id: &str) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            reason: "Annual check-up".into(),
            appointment_time: Utc.with_ymd_and_hms(2026, 9, 14, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn create_defaults_to_scheduled_without_video_link() {
        let conn = open_memory_database().unwrap();
        let patient_id = make_patient(&conn, "Ama Boateng");
        let doctor_id = make_doctor(&conn);

        let appointment = create_appointment(&conn, request(&patient_id, &doctor_id)).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.video_link, None);
        assert_eq!(get_appointment(&conn, &appointment.id).unwrap(), appointment);
    }

    #[test]
    fn create_with_unknown_patient_stores_nothing() {
        let conn = open_memory_database().unwrap();
        let doctor_id = make_doctor(&conn);

        let err = create_appointment(&conn, request("pat-404", &doctor_id)).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidPayload(msg) if msg == "Patient with id pat-404 does not exist"
        ));
        assert_eq!(EntityStore::<Appointment>::new(&conn).count().unwrap(), 0);
    }

    #[test]
    fn filters_by_patient_and_doctor() {
        let conn = open_memory_database().unwrap();
        let patient_id = make_patient(&conn, "Ama Boateng");
        let doctor_id = make_doctor(&conn);
        let appointment = create_appointment(&conn, request(&patient_id, &doctor_id)).unwrap();

        assert_eq!(
            get_appointments_by_patient(&conn, &patient_id).unwrap()[0].id,
            appointment.id
        );
        assert_eq!(
            get_appointments_by_doctor(&conn, &doctor_id).unwrap()[0].id,
            appointment.id
        );
        assert_eq!(get_all_appointments(&conn).unwrap().len(), 1);

        let err = get_appointments_by_doctor(&conn, "doc-404").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn update_can_change_status() {
        let conn = open_memory_database().unwrap();
        let patient_id = make_patient(&conn, "Ama Boateng");
        let doctor_id = make_doctor(&conn);
        let appointment = create_appointment(&conn, request(&patient_id, &doctor_id)).unwrap();

        let updated = update_appointment(
            &conn,
            &appointment.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::Canceled),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.status, AppointmentStatus::Canceled);
        assert_eq!(updated.reason, appointment.reason);
        assert_eq!(updated.appointment_time, appointment.appointment_time);
    }

    #[test]
    fn video_link_must_be_non_empty() {
        let conn = open_memory_database().unwrap();
        let patient_id = make_patient(&conn, "Ama Boateng");
        let doctor_id = make_doctor(&conn);
        let appointment = create_appointment(&conn, request(&patient_id, &doctor_id)).unwrap();

        let err = update_appointment_video_link(&conn, &appointment.id, "  ").unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidPayload(msg) if msg == MISSING_FIELDS
        ));

        let updated =
            update_appointment_video_link(&conn, &appointment.id, "https://meet.example/room-1")
                .unwrap();
        assert_eq!(
            updated.video_link.as_deref(),
            Some("https://meet.example/room-1")
        );
    }
}
