use sea_query::{Iden, Order, Value};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use sqlx::postgres::PgRow;
use std::fmt::Debug;
use validator::Validate;

/// Sort direction for a table's default ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// Human-facing names of a resource, used in response messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceNames {
    /// Capitalized name, e.g. "Medical record"
    pub label: &'static str,
    /// e.g. "medical record"
    pub singular: &'static str,
    /// e.g. "medical records"
    pub plural: &'static str,
    /// Key under which a deleted row is returned, e.g. "record"
    pub deleted_key: &'static str,
}

impl ResourceNames {
    pub fn deleted_message(&self) -> String {
        format!("{} deleted", self.label)
    }
}

/// Deserializes a blank or whitespace-only string as `None`.
/// Form clients send `""` for optional fields left empty.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// A table exposed through the generic CRUD routes.
///
/// Implemented on the row type itself. The implementation describes the table
/// (name, primary key, default ordering), the request field set, and how that
/// field set maps onto columns. [`Repository`](super::repository::Repository)
/// does the rest.
pub trait Resource:
    for<'r> FromRow<'r, PgRow> + Serialize + Debug + Send + Sync + Unpin + 'static
{
    /// sea-query identifier enum for the table and its columns
    type Column: Iden + Copy + Debug + Send + Sync + 'static;

    /// Request body accepted by create and update
    type Fields: DeserializeOwned + Validate + Debug + Send + 'static;

    const TABLE: Self::Column;
    const PRIMARY_KEY: Self::Column;
    /// ORDER BY terms for list and nested list queries
    const ORDER_BY: &'static [(Self::Column, SortDirection)];
    const NAMES: ResourceNames;

    /// Every writable column paired with its value, in column order.
    /// Absent fields become NULL.
    fn column_values(fields: Self::Fields) -> Vec<(Self::Column, Value)>;

    /// Fills create-time defaults. Updates never go through this.
    fn with_defaults(fields: Self::Fields) -> Self::Fields {
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_messages() {
        let names = ResourceNames {
            label: "Medical record",
            singular: "medical record",
            plural: "medical records",
            deleted_key: "record",
        };

        assert_eq!(names.deleted_message(), "Medical record deleted");
    }

    #[derive(Debug, Deserialize)]
    struct Contact {
        #[serde(default, deserialize_with = "blank_as_none")]
        email: Option<String>,
    }

    #[test]
    fn test_blank_strings_deserialize_as_none() {
        let parse = |raw: &str| serde_json::from_str::<Contact>(raw).unwrap().email;

        assert_eq!(parse(r#"{"email": ""}"#), None);
        assert_eq!(parse(r#"{"email": "   "}"#), None);
        assert_eq!(parse(r#"{"email": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
        assert_eq!(parse(r#"{"email": "a@x.com"}"#), Some("a@x.com".to_string()));
    }

    #[test]
    fn test_sort_direction_maps_to_order() {
        assert!(matches!(Order::from(SortDirection::Asc), Order::Asc));
        assert!(matches!(Order::from(SortDirection::Desc), Order::Desc));
    }
}
