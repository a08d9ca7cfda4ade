use serde::ser::{Serialize, SerializeMap, Serializer};
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use crate::{
    datalayer::CRUD::{Repository, Resource, ResourceNames},
    errors::{ServiceError, ServiceResult},
};

/// The five row-level operations, used to phrase failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Client-facing message for a database failure, e.g. "Error creating pet"
    pub fn failure_message(self, names: &ResourceNames) -> String {
        match self {
            Operation::List => format!("Error fetching {}", names.plural),
            Operation::Get => format!("Error fetching {}", names.singular),
            Operation::Create => format!("Error creating {}", names.singular),
            Operation::Update => format!("Error updating {}", names.singular),
            Operation::Delete => format!("Error deleting {}", names.singular),
        }
    }
}

/// Body of a successful DELETE: `{"message": "Pet deleted", "pet": {...}}`
#[derive(Debug)]
pub struct Deleted<R> {
    pub message: String,
    pub row: R,
}

impl<R: Resource> Deleted<R> {
    pub fn new(row: R) -> Self {
        Self {
            message: R::NAMES.deleted_message(),
            row,
        }
    }
}

impl<R: Resource> Serialize for Deleted<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry(R::NAMES.deleted_key, &self.row)?;
        map.end()
    }
}

/// Logs the driver error and hides it behind the operation's generic message
fn database_error<R: Resource>(operation: Operation) -> impl FnOnce(sqlx::Error) -> ServiceError {
    move |err| {
        error!(
            error = %err,
            table = R::NAMES.plural,
            operation = ?operation,
            "Database operation failed"
        );
        ServiceError::DatabaseError(operation.failure_message(&R::NAMES))
    }
}

#[instrument(skip(pool), fields(resource = R::NAMES.plural))]
pub async fn list<R: Resource>(pool: &PgPool) -> ServiceResult<Vec<R>> {
    let rows = Repository::<R>::new(pool)
        .list()
        .await
        .map_err(database_error::<R>(Operation::List))?;

    info!(count = rows.len(), "Listed rows");
    Ok(rows)
}

/// Children of a parent row, e.g. the pets of one client
#[instrument(skip(pool), fields(resource = R::NAMES.plural))]
pub async fn list_children<R: Resource>(
    pool: &PgPool,
    parent_column: R::Column,
    parent_id: i32,
) -> ServiceResult<Vec<R>> {
    let rows = Repository::<R>::new(pool)
        .list_by(parent_column, parent_id)
        .await
        .map_err(database_error::<R>(Operation::List))?;

    info!(count = rows.len(), parent_id, "Listed child rows");
    Ok(rows)
}

#[instrument(skip(pool), fields(resource = R::NAMES.plural))]
pub async fn get<R: Resource>(pool: &PgPool, id: i32) -> ServiceResult<R> {
    Repository::<R>::new(pool)
        .find(id)
        .await
        .map_err(database_error::<R>(Operation::Get))?
        .ok_or(ServiceError::NotFound(R::NAMES.label))
}

#[instrument(skip(pool, fields), fields(resource = R::NAMES.plural))]
pub async fn create<R: Resource>(pool: &PgPool, fields: R::Fields) -> ServiceResult<R> {
    let row = Repository::<R>::new(pool)
        .create(fields)
        .await
        .map_err(database_error::<R>(Operation::Create))?;

    debug!(row = ?row, "Row created");
    Ok(row)
}

#[instrument(skip(pool, fields), fields(resource = R::NAMES.plural))]
pub async fn update<R: Resource>(pool: &PgPool, id: i32, fields: R::Fields) -> ServiceResult<R> {
    let row = Repository::<R>::new(pool)
        .update(id, fields)
        .await
        .map_err(database_error::<R>(Operation::Update))?
        .ok_or(ServiceError::NotFound(R::NAMES.label))?;

    info!(id, "Row updated");
    Ok(row)
}

#[instrument(skip(pool), fields(resource = R::NAMES.plural))]
pub async fn delete<R: Resource>(pool: &PgPool, id: i32) -> ServiceResult<Deleted<R>> {
    let row = Repository::<R>::new(pool)
        .delete(id)
        .await
        .map_err(database_error::<R>(Operation::Delete))?
        .ok_or(ServiceError::NotFound(R::NAMES.label))?;

    info!(id, "Row deleted");
    Ok(Deleted::new(row))
}
