use super::resource::{Resource, ResourceNames, SortDirection, blank_as_none};
use super::types::{Client, Clients};
use sea_query::Value;
use serde::Deserialize;
use validator::Validate;

/// Request body for POST/PUT /clients
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ClientFields {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Resource for Client {
    type Column = Clients;
    type Fields = ClientFields;

    const TABLE: Clients = Clients::Table;
    const PRIMARY_KEY: Clients = Clients::Id;
    const ORDER_BY: &'static [(Clients, SortDirection)] = &[(Clients::Id, SortDirection::Asc)];
    const NAMES: ResourceNames = ResourceNames {
        label: "Client",
        singular: "client",
        plural: "clients",
        deleted_key: "client",
    };

    fn column_values(fields: ClientFields) -> Vec<(Clients, Value)> {
        vec![
            (Clients::Name, fields.name.into()),
            (Clients::Email, fields.email.into()),
            (Clients::Phone, fields.phone.into()),
            (Clients::Address, fields.address.into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_values_cover_every_field() {
        let fields = ClientFields {
            name: Some("Ana".to_string()),
            email: Some("a@x.com".to_string()),
            phone: Some("555".to_string()),
            address: None,
        };

        let values = Client::column_values(fields);
        assert_eq!(values.len(), 4);
        assert_eq!(values[0].1, Value::from("Ana"));
        assert_eq!(values[3].1, Value::String(None));
    }

    #[test]
    fn test_validation_requires_name_and_valid_email() {
        let valid = ClientFields {
            name: Some("Ana".to_string()),
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let missing_name = ClientFields::default();
        let errors = missing_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let bad_email = ClientFields {
            name: Some("Ana".to_string()),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_blank_email_is_treated_as_absent() {
        let fields: ClientFields =
            serde_json::from_value(serde_json::json!({ "name": "E", "email": "" })).unwrap();

        assert_eq!(fields.email, None);
        assert!(fields.validate().is_ok());
    }
}
