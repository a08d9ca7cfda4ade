pub mod appointments;
pub mod clients;
pub mod medical_records;
pub mod pets;
pub mod repository;
pub mod resource;
pub mod sql_generator;
pub mod types;
pub mod veterinarians;

pub use repository::Repository;
pub use resource::{Resource, ResourceNames, SortDirection};
