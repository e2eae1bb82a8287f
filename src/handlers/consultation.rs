use rusqlite::Connection;
use uuid::Uuid;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::models::{
    Consultation, CreateConsultationRequest, Department, Patient, UpdateConsultationRequest,
};

use super::validate::{fetch, non_empty, require_exists, require_fields};

pub fn create_consultation(
    conn: &Connection,
    payload: CreateConsultationRequest,
) -> Result<Consultation, ServiceError> {
    require_fields(&[&payload.patient_id, &payload.problem, &payload.department_id])?;
    require_exists::<Patient>(conn, &payload.patient_id)?;
    require_exists::<Department>(conn, &payload.department_id)?;

    let consultation = Consultation {
        id: Uuid::new_v4().to_string(),
        patient_id: payload.patient_id,
        problem: payload.problem,
        department_id: payload.department_id,
    };
    EntityStore::<Consultation>::new(conn).insert(&consultation)?;
    tracing::info!("Created consultation {}", consultation.id);
    Ok(consultation)
}

pub fn get_consultation(conn: &Connection, id: &str) -> Result<Consultation, ServiceError> {
    fetch(conn, id)
}

pub fn get_consultations_by_patient(
    conn: &Connection,
    patient_id: &str,
) -> Result<Vec<Consultation>, ServiceError> {
    let consultations = EntityStore::<Consultation>::new(conn)
        .values()?
        .into_iter()
        .filter(|c| c.patient_id == patient_id)
        .collect();
    non_empty(consultations, "consultations")
}

/// Shallow merge: payload fields win, absent fields keep prior values.
/// Reference fields are not re-validated here.
pub fn update_consultation(
    conn: &Connection,
    id: &str,
    payload: UpdateConsultationRequest,
) -> Result<Consultation, ServiceError> {
    let existing: Consultation = fetch(conn, id)?;
    let merged = Consultation {
        id: existing.id,
        patient_id: payload.patient_id.unwrap_or(existing.patient_id),
        problem: payload.problem.unwrap_or(existing.problem),
        department_id: payload.department_id.unwrap_or(existing.department_id),
    };
    EntityStore::<Consultation>::new(conn).insert(&merged)?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::handlers::test_support::{make_department, make_patient};

    fn seed(conn: &Connection) -> (String, String) {
        (make_patient(conn, "Ama Boateng"), make_department(conn))
    }

    #[test]
    fn create_then_get_round_trips() {
        let conn = open_memory_database().unwrap();
        let (patient_id, department_id) = seed(&conn);

        let created = create_consultation(
            &conn,
            CreateConsultationRequest {
                patient_id,
                problem: "Chest pain".into(),
                department_id,
            },
        )
        .unwrap();

        assert_eq!(get_consultation(&conn, &created.id).unwrap(), created);
    }

    #[test]
    fn create_with_unknown_patient_stores_nothing() {
        let conn = open_memory_database().unwrap();
        let (_, department_id) = seed(&conn);

        let err = create_consultation(
            &conn,
            CreateConsultationRequest {
                patient_id: "pat-404".into(),
                problem: "Chest pain".into(),
                department_id,
            },
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::InvalidPayload(msg) if msg == "Patient with id pat-404 does not exist"
        ));
        assert_eq!(EntityStore::<Consultation>::new(&conn).count().unwrap(), 0);
    }

    #[test]
    fn by_patient_lists_history_and_rejects_empty() {
        let conn = open_memory_database().unwrap();
        let (patient_id, department_id) = seed(&conn);

        for problem in ["Chest pain", "Follow-up"] {
            create_consultation(
                &conn,
                CreateConsultationRequest {
                    patient_id: patient_id.clone(),
                    problem: problem.into(),
                    department_id: department_id.clone(),
                },
            )
            .unwrap();
        }

        let history = get_consultations_by_patient(&conn, &patient_id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].problem, "Chest pain");

        let err = get_consultations_by_patient(&conn, "pat-404").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn update_merges_problem_only() {
        let conn = open_memory_database().unwrap();
        let (patient_id, department_id) = seed(&conn);

        let created = create_consultation(
            &conn,
            CreateConsultationRequest {
                patient_id,
                problem: "Chest pain".into(),
                department_id,
            },
        )
        .unwrap();

        let updated = update_consultation(
            &conn,
            &created.id,
            UpdateConsultationRequest {
                problem: Some("Chest pain, radiating".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.problem, "Chest pain, radiating");
        assert_eq!(updated.patient_id, created.patient_id);
        assert_eq!(updated.department_id, created.department_id);
    }
}
