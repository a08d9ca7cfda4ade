use super::resource::{Resource, ResourceNames, SortDirection, blank_as_none};
use super::types::{Veterinarian, Veterinarians};
use sea_query::Value;
use serde::Deserialize;
use validator::Validate;

/// Request body for POST/PUT /veterinarians
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VeterinarianFields {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
}

impl Resource for Veterinarian {
    type Column = Veterinarians;
    type Fields = VeterinarianFields;

    const TABLE: Veterinarians = Veterinarians::Table;
    const PRIMARY_KEY: Veterinarians = Veterinarians::Id;
    const ORDER_BY: &'static [(Veterinarians, SortDirection)] =
        &[(Veterinarians::Id, SortDirection::Asc)];
    const NAMES: ResourceNames = ResourceNames {
        label: "Veterinarian",
        singular: "veterinarian",
        plural: "veterinarians",
        deleted_key: "veterinarian",
    };

    fn column_values(fields: VeterinarianFields) -> Vec<(Veterinarians, Value)> {
        vec![
            (Veterinarians::Name, fields.name.into()),
            (Veterinarians::Email, fields.email.into()),
            (Veterinarians::Phone, fields.phone.into()),
            (Veterinarians::Specialty, fields.specialty.into()),
        ]
    }
}
