use super::resource::{Resource, ResourceNames, SortDirection};
use super::types::{Pet, Pets};
use chrono::NaiveDate;
use sea_query::Value;
use serde::Deserialize;
use validator::Validate;

/// Request body for POST/PUT /pets
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PetFields {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[validate(
        required(message = "client_id is required"),
        range(min = 1, message = "client_id must be positive")
    )]
    pub client_id: Option<i32>,
}

impl Resource for Pet {
    type Column = Pets;
    type Fields = PetFields;

    const TABLE: Pets = Pets::Table;
    const PRIMARY_KEY: Pets = Pets::Id;
    const ORDER_BY: &'static [(Pets, SortDirection)] = &[(Pets::Id, SortDirection::Asc)];
    const NAMES: ResourceNames = ResourceNames {
        label: "Pet",
        singular: "pet",
        plural: "pets",
        deleted_key: "pet",
    };

    fn column_values(fields: PetFields) -> Vec<(Pets, Value)> {
        vec![
            (Pets::Name, fields.name.into()),
            (Pets::Species, fields.species.into()),
            (Pets::Breed, fields.breed.into()),
            (Pets::BirthDate, fields.birth_date.into()),
            (Pets::ClientId, fields.client_id.into()),
        ]
    }
}
