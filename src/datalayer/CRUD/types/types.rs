use chrono::{NaiveDate, NaiveTime};
use sea_query::Iden;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[allow(non_snake_case)]
pub mod DBTables {
    pub const CLIENTS: &str = "clients";
    pub const VETERINARIANS: &str = "veterinarians";
    pub const PETS: &str = "pets";
    pub const APPOINTMENTS: &str = "appointments";
    pub const MEDICAL_RECORDS: &str = "medical_records";
}

/* ----------------------------- TABLE IDENTIFIERS ----------------------------- */

#[derive(Iden, Clone, Copy, Debug)]
pub enum Clients {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Address,
}

#[derive(Iden, Clone, Copy, Debug)]
pub enum Veterinarians {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Specialty,
}

#[derive(Iden, Clone, Copy, Debug)]
pub enum Pets {
    Table,
    Id,
    Name,
    Species,
    Breed,
    BirthDate,
    ClientId,
}

#[derive(Iden, Clone, Copy, Debug)]
pub enum Appointments {
    Table,
    Id,
    PetId,
    VetId,
    AppointmentDate,
    AppointmentTime,
    Reason,
    Status,
    Notes,
}

#[derive(Iden, Clone, Copy, Debug)]
pub enum MedicalRecords {
    Table,
    Id,
    PetId,
    RecordDate,
    Diagnosis,
    Treatment,
    Medications,
    Notes,
    VetId,
}

/* ----------------------------- ROWS ----------------------------- */

// Non-id columns are nullable: a PUT overwrites omitted fields with NULL.

/// Row of the `clients` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Row of the `veterinarians` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Veterinarian {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
}

/// Row of the `pets` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Pet {
    pub id: i32,
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub client_id: Option<i32>,
}

/// Row of the `appointments` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: i32,
    pub pet_id: Option<i32>,
    pub vet_id: Option<i32>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    pub reason: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Row of the `medical_records` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MedicalRecord {
    pub id: i32,
    pub pet_id: Option<i32>,
    pub record_date: Option<NaiveDate>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub medications: Option<String>,
    pub notes: Option<String>,
    pub vet_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_idents_match_table_names() {
        assert_eq!(Iden::to_string(&Clients::Table), DBTables::CLIENTS);
        assert_eq!(Iden::to_string(&Veterinarians::Table), DBTables::VETERINARIANS);
        assert_eq!(Iden::to_string(&Pets::Table), DBTables::PETS);
        assert_eq!(Iden::to_string(&Appointments::Table), DBTables::APPOINTMENTS);
        assert_eq!(Iden::to_string(&MedicalRecords::Table), DBTables::MEDICAL_RECORDS);
    }

    #[test]
    fn test_column_idents_are_snake_case() {
        assert_eq!(Iden::to_string(&Pets::BirthDate), "birth_date");
        assert_eq!(Iden::to_string(&Appointments::AppointmentTime), "appointment_time");
        assert_eq!(Iden::to_string(&MedicalRecords::VetId), "vet_id");
    }
}
