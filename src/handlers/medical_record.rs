use rusqlite::Connection;

use crate::db::EntityStore;
use crate::error::ServiceError;
use crate::models::{
    CreateMedicalRecordRequest, MedicalRecord, Patient, UpdateMedicalRecordRequest,
};

use super::validate::{fetch, require_exists, require_fields};

/// The record is keyed by patient id; creating again for the same patient
/// replaces the previous record.
pub fn create_medical_record(
    conn: &Connection,
    payload: CreateMedicalRecordRequest,
) -> Result<MedicalRecord, ServiceError> {
    require_fields(&[&payload.patient_id])?;
    require_exists::<Patient>(conn, &payload.patient_id)?;

    let record = MedicalRecord {
        patient_id: payload.patient_id,
        consultation_notes: payload.consultation_notes,
        prescriptions: payload.prescriptions,
        lab_results: payload.lab_results,
        immunizations: payload.immunizations,
    };
    EntityStore::<MedicalRecord>::new(conn).insert(&record)?;
    tracing::info!("Stored medical record for patient {}", record.patient_id);
    Ok(record)
}

pub fn get_medical_record(conn: &Connection, patient_id: &str) -> Result<MedicalRecord, ServiceError> {
    fetch(conn, patient_id)
}

/// Full overwrite of the list fields; there is no merge.
pub fn update_medical_record(
    conn: &Connection,
    patient_id: &str,
    payload: UpdateMedicalRecordRequest,
) -> Result<MedicalRecord, ServiceError> {
    fetch::<MedicalRecord>(conn, patient_id)?;

    let record = MedicalRecord {
        patient_id: patient_id.to_string(),
        consultation_notes: payload.consultation_notes,
        prescriptions: payload.prescriptions,
        lab_results: payload.lab_results,
        immunizations: payload.immunizations,
    };
    EntityStore::<MedicalRecord>::new(conn).insert(&record)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::handlers::test_support::make_patient;

    fn request(patient_id: &str) -> CreateMedicalRecordRequest {
        CreateMedicalRecordRequest {
            patient_id: patient_id.into(),
            consultation_notes: vec!["Initial visit".into()],
            prescriptions: vec!["Amoxicillin 500mg".into()],
            lab_results: vec![],
            immunizations: vec!["Tetanus 2024".into()],
        }
    }

    #[test]
    fn create_is_keyed_by_patient_id() {
        let conn = open_memory_database().unwrap();
        let patient_id = make_patient(&conn, "Ama Boateng");

        let record = create_medical_record(&conn, request(&patient_id)).unwrap();
        assert_eq!(get_medical_record(&conn, &patient_id).unwrap(), record);
    }

    #[test]
    fn create_with_unknown_patient_stores_nothing() {
        let conn = open_memory_database().unwrap();

        let err = create_medical_record(&conn, request("pat-404")).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidPayload(msg) if msg == "Patient with id pat-404 does not exist"
        ));
        assert_eq!(EntityStore::<MedicalRecord>::new(&conn).count().unwrap(), 0);
    }

    #[test]
    fn recreate_for_same_patient_replaces_record() {
        let conn = open_memory_database().unwrap();
        let patient_id = make_patient(&conn, "Ama Boateng");

        create_medical_record(&conn, request(&patient_id)).unwrap();
        let mut second = request(&patient_id);
        second.consultation_notes = vec!["Second visit".into()];
        create_medical_record(&conn, second).unwrap();

        assert_eq!(EntityStore::<MedicalRecord>::new(&conn).count().unwrap(), 1);
        assert_eq!(
            get_medical_record(&conn, &patient_id).unwrap().consultation_notes,
            vec!["Second visit".to_string()]
        );
    }

    #[test]
    fn update_overwrites_lists_wholesale() {
        let conn = open_memory_database().unwrap();
        let patient_id = make_patient(&conn, "Ama Boateng");
        create_medical_record(&conn, request(&patient_id)).unwrap();

        let updated = update_medical_record(
            &conn,
            &patient_id,
            UpdateMedicalRecordRequest {
                consultation_notes: vec![],
                prescriptions: vec![],
                lab_results: vec!["CBC normal".into()],
                immunizations: vec![],
            },
        )
        .unwrap();

        // No merge: the earlier notes and immunizations are gone.
        assert!(updated.consultation_notes.is_empty());
        assert!(updated.immunizations.is_empty());
        assert_eq!(updated.lab_results, vec!["CBC normal".to_string()]);
    }

    #[test]
    fn update_without_existing_record_is_not_found() {
        let conn = open_memory_database().unwrap();
        let patient_id = make_patient(&conn, "Ama Boateng");

        let err = update_medical_record(
            &conn,
            &patient_id,
            UpdateMedicalRecordRequest {
                consultation_notes: vec![],
                prescriptions: vec![],
                lab_results: vec![],
                immunizations: vec![],
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
