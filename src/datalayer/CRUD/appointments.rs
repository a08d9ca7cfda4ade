use super::resource::{Resource, ResourceNames, SortDirection};
use super::types::{Appointment, Appointments};
use chrono::{NaiveDate, NaiveTime};
use sea_query::Value;
use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_STATUS: &str = "scheduled";

/// Request body for POST/PUT /appointments
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AppointmentFields {
    #[validate(
        required(message = "pet_id is required"),
        range(min = 1, message = "pet_id must be positive")
    )]
    pub pet_id: Option<i32>,
    #[validate(
        required(message = "vet_id is required"),
        range(min = 1, message = "vet_id must be positive")
    )]
    pub vet_id: Option<i32>,
    #[validate(required(message = "appointment_date is required"))]
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    pub reason: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl Resource for Appointment {
    type Column = Appointments;
    type Fields = AppointmentFields;

    const TABLE: Appointments = Appointments::Table;
    const PRIMARY_KEY: Appointments = Appointments::Id;
    const ORDER_BY: &'static [(Appointments, SortDirection)] = &[
        (Appointments::AppointmentDate, SortDirection::Desc),
        (Appointments::Id, SortDirection::Asc),
    ];
    const NAMES: ResourceNames = ResourceNames {
        label: "Appointment",
        singular: "appointment",
        plural: "appointments",
        deleted_key: "appointment",
    };

    fn column_values(fields: AppointmentFields) -> Vec<(Appointments, Value)> {
        vec![
            (Appointments::PetId, fields.pet_id.into()),
            (Appointments::VetId, fields.vet_id.into()),
            (Appointments::AppointmentDate, fields.appointment_date.into()),
            (Appointments::AppointmentTime, fields.appointment_time.into()),
            (Appointments::Reason, fields.reason.into()),
            (Appointments::Status, fields.status.into()),
            (Appointments::Notes, fields.notes.into()),
        ]
    }

    /// A missing or empty status becomes "scheduled"
    fn with_defaults(mut fields: AppointmentFields) -> AppointmentFields {
        if fields.status.as_deref().map_or(true, str::is_empty) {
            fields.status = Some(DEFAULT_STATUS.to_string());
        }
        fields
    }
}
