use super::resource::{Resource, ResourceNames, SortDirection};
use super::types::{MedicalRecord, MedicalRecords};
use chrono::NaiveDate;
use sea_query::Value;
use serde::Deserialize;
use validator::Validate;

/// Request body for POST/PUT /medical-records
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MedicalRecordFields {
    #[validate(
        required(message = "pet_id is required"),
        range(min = 1, message = "pet_id must be positive")
    )]
    pub pet_id: Option<i32>,
    #[validate(required(message = "record_date is required"))]
    pub record_date: Option<NaiveDate>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub medications: Option<String>,
    pub notes: Option<String>,
    #[validate(range(min = 1, message = "vet_id must be positive"))]
    pub vet_id: Option<i32>,
}

impl Resource for MedicalRecord {
    type Column = MedicalRecords;
    type Fields = MedicalRecordFields;

    const TABLE: MedicalRecords = MedicalRecords::Table;
    const PRIMARY_KEY: MedicalRecords = MedicalRecords::Id;
    const ORDER_BY: &'static [(MedicalRecords, SortDirection)] = &[
        (MedicalRecords::RecordDate, SortDirection::Desc),
        (MedicalRecords::Id, SortDirection::Asc),
    ];
    const NAMES: ResourceNames = ResourceNames {
        label: "Medical record",
        singular: "medical record",
        plural: "medical records",
        deleted_key: "record",
    };

    fn column_values(fields: MedicalRecordFields) -> Vec<(MedicalRecords, Value)> {
        vec![
            (MedicalRecords::PetId, fields.pet_id.into()),
            (MedicalRecords::RecordDate, fields.record_date.into()),
            (MedicalRecords::Diagnosis, fields.diagnosis.into()),
            (MedicalRecords::Treatment, fields.treatment.into()),
            (MedicalRecords::Medications, fields.medications.into()),
            (MedicalRecords::Notes, fields.notes.into()),
            (MedicalRecords::VetId, fields.vet_id.into()),
        ]
    }
}
